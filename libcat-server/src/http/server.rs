//! Axum server setup
//!
//! Server skeleton with:
//! - JSON API routes under `/api`
//! - Static front-end served for every other path
//! - Permissive CORS and request tracing
//! - Shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::Catalog;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Directory holding `index.html` and the rest of the front-end
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            static_dir: PathBuf::from("."),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// Build the application router.
///
/// API routes take precedence; anything else is looked up in `static_dir`,
/// with `/` resolving to `index.html`.
pub fn build_router(catalog: Catalog, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .merge(routes::books::router())
        .merge(routes::members::router())
        .merge(routes::transactions::router())
        .merge(routes::overdue::router())
        .with_state(Arc::new(AppState::new(catalog)))
        .fallback_service(ServeDir::new(static_dir.into()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let config = CatalogConfig::embedded().with_database_url("postgres://localhost/library");
/// let catalog = db::connect(&config).await?;
/// run_server(catalog, ServerConfig::default()).await?;
/// ```
pub async fn run_server(catalog: Catalog, config: ServerConfig) -> Result<(), ServerError> {
    let dialect = catalog.dialect();
    let app = build_router(catalog, config.static_dir.clone());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        %dialect,
        static_dir = %config.static_dir.display(),
        "Server listening on {}",
        config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(config.bind_addr.ip().is_unspecified());
        assert_eq!(config.static_dir, PathBuf::from("."));
    }
}
