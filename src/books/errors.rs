//! # Book Errors
//!
//! Error types for the book catalogue.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// The mutating operation an error belongs to, used in client-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    Update,
    Delete,
}

impl BookAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookAction::Add => "add",
            BookAction::Update => "update",
            BookAction::Delete => "delete",
        }
    }
}

impl fmt::Display for BookAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Book catalogue errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    // ==================
    // Validation Errors (400)
    // ==================
    /// `name` absent, null or empty
    #[error("Failed to {action} book. Please provide the book name")]
    MissingName { action: BookAction },

    /// `readPage` greater than `pageCount`
    #[error("Failed to {action} book. readPage cannot be greater than pageCount")]
    ReadPageExceedsPageCount { action: BookAction },

    /// Request body could not be decoded
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    // ==================
    // Lookup Errors (404)
    // ==================
    /// Book lookup by id failed
    #[error("Book not found")]
    NotFound,

    /// Mutation targeted an unknown id
    #[error("Failed to {action} book. Id not found")]
    IdNotFound { action: BookAction },

    /// No route matched the request
    #[error("Route not found")]
    RouteNotFound,

    // ==================
    // Server Errors (500)
    // ==================
    /// Post-insert consistency check failed
    #[error("Failed to add book")]
    Internal(String),

    /// Collection lock poisoned
    #[error("Book storage unavailable: {0}")]
    Storage(String),
}

impl BookError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::MissingName { .. } => StatusCode::BAD_REQUEST,
            BookError::ReadPageExceedsPageCount { .. } => StatusCode::BAD_REQUEST,
            BookError::InvalidPayload(_) => StatusCode::BAD_REQUEST,

            BookError::NotFound => StatusCode::NOT_FOUND,
            BookError::IdNotFound { .. } => StatusCode::NOT_FOUND,
            BookError::RouteNotFound => StatusCode::NOT_FOUND,

            BookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope status: `fail` for client errors, `error` for server errors
    pub fn status(&self) -> &'static str {
        if self.status_code().is_server_error() {
            "error"
        } else {
            "fail"
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl From<&BookError> for ErrorResponse {
    fn from(err: &BookError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
