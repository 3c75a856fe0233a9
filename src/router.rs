//! Router assembly for the greeting service.
//!
//! The routing table has exactly one entry: the fallback, which axum invokes
//! for every method/path pair not matched by another route. With no other
//! routes registered, "matches everything" is an explicit property of this
//! function rather than an implicit framework default.

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Builds the catch-all router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::greet::greet)
        .with_state(state)
}
