//! The greeting handler.

use axum::extract::State;

use crate::env::sandbox_env;
use crate::state::AppState;

/// Responds to any request with the greeting line.
///
/// The environment value is read on every invocation, so the response tracks
/// the current process environment rather than a startup snapshot. This
/// handler cannot fail; the implied status is 200 and the Content-Type is
/// whatever axum assigns to a plain `String` body.
pub async fn greet(State(state): State<AppState>) -> String {
    format!(
        "Hello from sandbox environment: {}\n",
        sandbox_env(state.env.as_ref())
    )
}
