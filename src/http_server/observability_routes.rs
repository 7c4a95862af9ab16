//! Liveness endpoint reporting the running crate version.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    /// Health of this process
    pub fn current() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(|| async { Json(HealthResponse::current()) }))
}
