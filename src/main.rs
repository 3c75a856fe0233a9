//! Binary entrypoint for the sandbox greeting server.
//!
//! Takes no arguments. Reads `SANDBOX_ENV` per request to build the greeting;
//! listens on port 8080 (hardcoded). If the port cannot be bound, logs the
//! error and exits non-zero -- that is the only failure path.

use std::net::SocketAddr;

use sandbox_greeter::router::build_router;
use sandbox_greeter::server::{GreeterServer, DEFAULT_PORT};
use sandbox_greeter::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = AppState::from_process_env();
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT));
    tracing::info!("starting sandbox greeter on port {}", DEFAULT_PORT);

    let server = match GreeterServer::bind(addr).await {
        Ok(server) => server,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server.serve(app).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
