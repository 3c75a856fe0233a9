//! HTTP greeting service for sandboxed environments.
//!
//! Answers every request with a one-line greeting embedding the value of the
//! `SANDBOX_ENV` process environment variable (or a fixed default when the
//! variable is unset or empty). This crate contains the environment access
//! seam, the handler, the catch-all router, and the bind/serve split.

pub mod env;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
