//! Server bootstrap: bind, then serve.
//!
//! Binding and serving are split so bind failure is an ordinary `Result`
//! the caller can inspect, instead of a log-and-exit buried next to the
//! accept loop. Tests bind port 0 and read back [`GreeterServer::local_addr`];
//! the binary binds [`DEFAULT_PORT`] and treats `Err` as fatal.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::ServeError;

/// The service's listen port. Hardcoded; there is no flag or environment
/// override in this version.
pub const DEFAULT_PORT: u16 = 8080;

/// A bound, not-yet-serving listener.
pub struct GreeterServer {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl GreeterServer {
    /// Binds the listening socket.
    ///
    /// Returns [`ServeError::Bind`] if the address cannot be bound. No retry
    /// is attempted.
    pub async fn bind(addr: SocketAddr) -> Result<GreeterServer, ServeError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;
        // Resolve the actual address, which differs from `addr` when port 0
        // was requested.
        let local_addr = listener.local_addr()?;
        Ok(GreeterServer {
            listener,
            local_addr,
        })
    }

    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Runs the accept loop until a fatal I/O error.
    ///
    /// There is no graceful shutdown or signal handling; under normal
    /// operation this never returns. Connection-level failures (client
    /// disconnects, malformed requests) are absorbed by axum and do not
    /// surface here.
    pub async fn serve(self, app: Router) -> Result<(), ServeError> {
        axum::serve(self.listener, app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_reports_the_resolved_address() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let server = GreeterServer::bind(addr).await.unwrap();
        assert_ne!(server.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn bind_conflict_is_an_error_not_a_panic() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let first = GreeterServer::bind(addr).await.unwrap();

        let err = GreeterServer::bind(first.local_addr())
            .await
            .err()
            .expect("second bind to the same port should fail");
        match err {
            ServeError::Bind { addr, .. } => {
                assert_eq!(addr, first.local_addr());
            }
            other => panic!("expected Bind error, got {other:?}"),
        }
    }
}
