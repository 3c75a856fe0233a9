//! HTTP handlers for the greeting service.
//!
//! There is exactly one handler; it is registered as the router's catch-all
//! and serves every method and path identically.

pub mod greet;
