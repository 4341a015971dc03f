//! The HTTP application: router wiring and the server loop.

use super::handlers::{http_info, ip_calc, remote_ip};
use crate::config::Config;
use axum::{routing::get, Router};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared state accessible in the endpoint handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the router serving `/`, `/info` and `/ipcalc`.
///
/// Handlers read the peer address through `ConnectInfo`, so serve it with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn create_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(remote_ip))
        .route("/info", get(http_info))
        .route("/ipcalc", get(ip_calc))
        .with_state(AppState { config })
}

/// The service, built once at startup from its [`Config`].
pub struct App {
    config: Arc<Config>,
    router: Router,
}

impl App {
    pub fn new(config: Config) -> App {
        let config = Arc::new(config);
        let router = create_router(config.clone());
        App { config, router }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A copy of the application router, e.g. to drive it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        let listen_addr = self.config.listen_addr();
        let listener = tokio::net::TcpListener::bind(listen_addr)
            .await
            .map_err(|e| format!("Failed to bind listener on {listen_addr}: {e}"))?;
        log::info!("#Start serving http on {listen_addr}");

        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Http server error: {e}"))?;

        log::info!("#End serving http on {listen_addr}");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Ctrl-C received, shutting down"),
        Err(e) => log::error!("Failed to listen for Ctrl-C: {e}"),
    }
}
