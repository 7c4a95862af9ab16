//! # Book Repository
//!
//! Storage seam for the catalogue plus the in-memory implementation.

use std::collections::HashSet;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use super::errors::{BookError, BookResult};
use super::filter::ListFilter;
use super::model::{generate_book_id, Book, BookFields, BookSummary};

/// Book repository trait
///
/// Abstracts storage operations for books. Iteration follows insertion order.
pub trait BookRepository: Send + Sync {
    /// Reserve an id that has never been issued before
    fn allocate_id(&self) -> BookResult<String>;

    /// Append a book
    fn insert(&self, book: Book) -> BookResult<()>;

    /// Summaries of books matching the filter
    fn list(&self, filter: &ListFilter) -> BookResult<Vec<BookSummary>>;

    /// Find a book by id
    fn find(&self, id: &str) -> BookResult<Option<Book>>;

    /// Replace the mutable fields of a book. Returns false if the id is unknown.
    fn replace(&self, id: &str, fields: BookFields, now: DateTime<Utc>) -> BookResult<bool>;

    /// Remove a book. Returns false if the id is unknown.
    fn remove(&self, id: &str) -> BookResult<bool>;

    /// Number of stored books
    fn len(&self) -> BookResult<usize>;

    fn is_empty(&self) -> BookResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory book repository
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
    issued_ids: RwLock<HashSet<String>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> BookError {
    BookError::Storage("Lock poisoned".to_string())
}

impl BookRepository for InMemoryBookRepository {
    fn allocate_id(&self) -> BookResult<String> {
        let mut issued = self.issued_ids.write().map_err(|_| poisoned())?;

        loop {
            let id = generate_book_id();
            if issued.insert(id.clone()) {
                return Ok(id);
            }
        }
    }

    fn insert(&self, book: Book) -> BookResult<()> {
        let mut books = self.books.write().map_err(|_| poisoned())?;
        books.push(book);
        Ok(())
    }

    fn list(&self, filter: &ListFilter) -> BookResult<Vec<BookSummary>> {
        let books = self.books.read().map_err(|_| poisoned())?;
        Ok(books
            .iter()
            .filter(|b| filter.matches(b))
            .map(Book::summary)
            .collect())
    }

    fn find(&self, id: &str) -> BookResult<Option<Book>> {
        let books = self.books.read().map_err(|_| poisoned())?;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    fn replace(&self, id: &str, fields: BookFields, now: DateTime<Utc>) -> BookResult<bool> {
        let mut books = self.books.write().map_err(|_| poisoned())?;

        if let Some(existing) = books.iter_mut().find(|b| b.id == id) {
            existing.replace(fields, now);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn remove(&self, id: &str) -> BookResult<bool> {
        let mut books = self.books.write().map_err(|_| poisoned())?;

        let len_before = books.len();
        books.retain(|b| b.id != id);

        Ok(books.len() != len_before)
    }

    fn len(&self) -> BookResult<usize> {
        let books = self.books.read().map_err(|_| poisoned())?;
        Ok(books.len())
    }
}
