//! # Book Catalogue
//!
//! In-memory book records and the operations over them: add, list with a
//! single filter, get, full-replace update and delete.

pub mod errors;
pub mod filter;
pub mod model;
pub mod repository;
pub mod service;

pub use errors::{BookAction, BookError, BookResult};
pub use filter::{BooksQuery, ListFilter};
pub use model::{Book, BookFields, BookPayload, BookSummary};
pub use repository::{BookRepository, InMemoryBookRepository};
pub use service::BookService;
