//! HTTP server command handler.

use std::net::SocketAddr;

use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::http;

use super::App;

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

impl App {
    /// Run the HTTP server.
    pub async fn run_serve(&self, host: Option<&str>, port: Option<u16>) -> Result<()> {
        tracing::info!("Starting Categoria HTTP server");

        let mut config = Config::load()?;
        if let Some(host) = host {
            config.server.host = host.to_string();
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        tracing::info!(
            delay_ms = config.catalog.delay_ms,
            "Artificial page latency configured"
        );

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| {
                color_eyre::eyre::eyre!(
                    "Invalid address {}:{}: {}",
                    config.server.host,
                    config.server.port,
                    e
                )
            })?;

        let app = http::router(Context::new(config));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to bind to {}: {}", addr, e))?;

        tracing::info!("Categoria HTTP server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "HTTP server error");
                color_eyre::eyre::eyre!("HTTP server error: {}", e)
            })?;

        tracing::info!("HTTP server shutting down");
        Ok(())
    }
}
