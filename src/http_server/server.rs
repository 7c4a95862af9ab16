//! # HTTP Server
//!
//! Combines the book and health routers behind CORS and serves them.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::book_routes::{book_routes, route_not_found, BookState};
use super::config::{ConfigError, HttpServerConfig};
use super::observability_routes::health_routes;
use crate::books::BookRepository;
use crate::observability::Logger;

/// HTTP server for the book catalogue
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty catalogue
    pub fn with_config(config: HttpServerConfig) -> Result<Self, ConfigError> {
        Self::with_state(config, Arc::new(BookState::new()))
    }

    /// Create a new HTTP server over existing book state
    pub fn with_state<R: BookRepository + 'static>(
        config: HttpServerConfig,
        state: Arc<BookState<R>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let router = Self::build_router(&config, state)?;
        Ok(Self { config, router })
    }

    /// Build the combined router with all endpoints
    fn build_router<R: BookRepository + 'static>(
        config: &HttpServerConfig,
        state: Arc<BookState<R>>,
    ) -> Result<Router, ConfigError> {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.origins()?))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Ok(Router::new()
            .merge(health_routes())
            .merge(book_routes(state))
            .fallback(route_not_found)
            .layer(cors))
    }

    pub fn config(&self) -> &HttpServerConfig {
        &self.config
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self
            .config
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?.to_string();
        Logger::info("SERVER_LISTENING", &[("addr", local_addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("SERVER_STOPPED", &[]);
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed
        std::future::pending::<()>().await;
    }
}
