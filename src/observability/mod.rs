//! Observability for the book catalogue
//!
//! Structured JSON logging for server lifecycle and book mutations.
//!
//! ```ignore
//! use bookshelf::observability::Logger;
//!
//! Logger::info("BOOK_ADDED", &[("book_id", "Jh2pX0aQ7kLm3nBv")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
