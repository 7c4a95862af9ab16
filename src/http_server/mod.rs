//! # HTTP Server Module
//!
//! Axum server exposing the book catalogue.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - Add and list books
//! - `/books/:book_id` - Get, replace and delete one book

pub mod book_routes;
pub mod config;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use book_routes::{book_routes, BookState};
pub use config::{ConfigError, HttpServerConfig};
pub use server::HttpServer;
