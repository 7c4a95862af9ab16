//! # Response Envelope
//!
//! Successful responses are `{status: "success", message?, data?}`. Errors use
//! [`ErrorResponse`](crate::books::errors::ErrorResponse).

use serde::Serialize;

use crate::books::{Book, BookSummary};

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    pub fn message_and_data(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `data` of a successful add
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

/// `data` of a listing
#[derive(Debug, Clone, Serialize)]
pub struct BooksData {
    pub books: Vec<BookSummary>,
}

/// `data` of a single book lookup
#[derive(Debug, Clone, Serialize)]
pub struct BookData {
    pub book: Book,
}
