//! Server error types.
//!
//! [`ServeError`] covers the two ways the server can fail: the listening
//! socket cannot be bound (the only failure path the service defines -- port
//! in use, insufficient privilege), or the accept loop dies on a fatal I/O
//! error. The entry point decides what to do with either; this module only
//! describes them.

use std::net::SocketAddr;

/// Errors from binding or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The serve loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
