//! Application state shared across handler invocations.
//!
//! [`AppState`] carries the injected [`EnvSource`] behind an `Arc` so the
//! router can be cloned freely by axum. There is no other shared state: the
//! environment table is read-only from this service's perspective and needs
//! no synchronization.

use std::sync::Arc;

use crate::env::{EnvSource, ProcessEnv};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Source of environment variable values, read per request.
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    /// Creates state backed by the given environment source.
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        AppState { env }
    }

    /// Creates state backed by the live process environment.
    pub fn from_process_env() -> Self {
        AppState::new(Arc::new(ProcessEnv))
    }
}
