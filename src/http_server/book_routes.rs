//! Book HTTP Routes
//!
//! JSON endpoints for the book catalogue under `/books`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::response::{BookData, BookIdData, BooksData, SuccessResponse};
use crate::books::{
    BookAction, BookError, BookPayload, BookRepository, BookResult, BookService, BooksQuery,
    InMemoryBookRepository, ListFilter,
};
use crate::observability::Logger;

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState<R: BookRepository = InMemoryBookRepository> {
    pub service: BookService<R>,
}

impl BookState {
    /// State over an empty in-memory catalogue
    pub fn new() -> Self {
        Self::with_repository(InMemoryBookRepository::new())
    }
}

impl<R: BookRepository> BookState<R> {
    pub fn with_repository(repo: R) -> Self {
        Self {
            service: BookService::new(repo),
        }
    }
}

impl Default for BookState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes<R: BookRepository + 'static>(state: Arc<BookState<R>>) -> Router {
    Router::new()
        .route(
            "/books",
            get(list_books_handler::<R>).post(add_book_handler::<R>),
        )
        .route(
            "/books/:book_id",
            get(get_book_handler::<R>)
                .put(update_book_handler::<R>)
                .delete(delete_book_handler::<R>),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Log a failed request before it is turned into a response
fn log_failure(err: BookError) -> BookError {
    let message = err.to_string();
    if err.status_code().is_server_error() {
        Logger::error("BOOK_STORE_ERROR", &[("reason", message.as_str())]);
    } else {
        Logger::warn("BOOK_REJECTED", &[("reason", message.as_str())]);
    }
    err
}

/// Decode a body; only malformed JSON is rejected before the name check
fn read_payload(
    body: Result<Json<Value>, JsonRejection>,
    action: BookAction,
) -> BookResult<BookPayload> {
    let Json(body) = body.map_err(|rejection| BookError::InvalidPayload(rejection.body_text()))?;
    BookPayload::from_json(body, action)
}

/// Collect query pairs; repeated keys keep their first value
fn read_query(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> BookResult<BooksQuery> {
    query
        .map(|Query(pairs)| BooksQuery::from_pairs(pairs))
        .map_err(|rejection| BookError::InvalidPayload(rejection.body_text()))
}

// ==================
// Handlers
// ==================

async fn add_book_handler<R: BookRepository + 'static>(
    State(state): State<Arc<BookState<R>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<BookIdData>>), BookError> {
    let payload = read_payload(body, BookAction::Add).map_err(log_failure)?;
    let book_id = state.service.add(payload).map_err(log_failure)?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::message_and_data(
            "Book added successfully",
            BookIdData { book_id },
        )),
    ))
}

async fn list_books_handler<R: BookRepository + 'static>(
    State(state): State<Arc<BookState<R>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SuccessResponse<BooksData>>, BookError> {
    let query = read_query(query).map_err(log_failure)?;
    let filter = ListFilter::from_query(&query);
    let books = state.service.list(&filter).map_err(log_failure)?;

    Ok(Json(SuccessResponse::data(BooksData { books })))
}

async fn get_book_handler<R: BookRepository + 'static>(
    State(state): State<Arc<BookState<R>>>,
    Path(book_id): Path<String>,
) -> Result<Json<SuccessResponse<BookData>>, BookError> {
    let book = state.service.get(&book_id).map_err(log_failure)?;
    Ok(Json(SuccessResponse::data(BookData { book })))
}

async fn update_book_handler<R: BookRepository + 'static>(
    State(state): State<Arc<BookState<R>>>,
    Path(book_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessResponse<()>>, BookError> {
    let payload = read_payload(body, BookAction::Update).map_err(log_failure)?;
    state
        .service
        .update(&book_id, payload)
        .map_err(log_failure)?;

    Ok(Json(SuccessResponse::message("Book updated successfully")))
}

async fn delete_book_handler<R: BookRepository + 'static>(
    State(state): State<Arc<BookState<R>>>,
    Path(book_id): Path<String>,
) -> Result<Json<SuccessResponse<()>>, BookError> {
    state.service.delete(&book_id).map_err(log_failure)?;

    Ok(Json(SuccessResponse::message("Book deleted successfully")))
}

/// Fallback for unmatched paths
pub async fn route_not_found() -> BookError {
    BookError::RouteNotFound
}
