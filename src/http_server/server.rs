//! # HTTP Server
//!
//! Serves the ad routes over a shared, read-only interval index.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AdServerConfig;
use crate::index::IntervalIndex;

use super::routes::{ad_routes, AdState};

/// HTTP server for ad queries
pub struct HttpServer {
    config: AdServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already built index
    pub fn new(config: AdServerConfig, index: Arc<IntervalIndex>) -> Self {
        let state = Arc::new(AdState::new(index, config.clone()));
        let router = ad_routes(state).layer(TraceLayer::new_for_http());
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    ///
    /// Peer addresses are made available to handlers for privilege checks.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        info!(addr = %listener.local_addr()?, "ad server listening");

        axum::serve(
            listener,
            self.router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn sample_config() -> AdServerConfig {
        AdServerConfig::from_json_str(
            r#"{"server_host": "127.0.0.1", "server_port": 8000, "privileged_ips": []}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_server_socket_addr() {
        let index = Arc::new(IntervalIndex::build(Catalog::new(1, 0, Vec::new())));
        let server = HttpServer::new(sample_config(), index);
        assert_eq!(server.socket_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_router_builds() {
        let index = Arc::new(IntervalIndex::build(Catalog::new(1, 0, Vec::new())));
        let server = HttpServer::new(sample_config(), index);
        let _router = server.router();
    }
}
