//! # Book Service
//!
//! The five catalogue operations over a [`BookRepository`]. Validation always
//! runs before any lookup or mutation, so a rejected request leaves the
//! collection unchanged.

use chrono::Utc;

use super::errors::{BookAction, BookError, BookResult};
use super::filter::ListFilter;
use super::model::{Book, BookPayload, BookSummary};
use super::repository::BookRepository;
use crate::observability::Logger;

/// Book service over a repository
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Add a book and return its id
    pub fn add(&self, payload: BookPayload) -> BookResult<String> {
        let fields = payload.validate(BookAction::Add)?;

        let id = self.repo.allocate_id()?;
        self.repo.insert(Book::new(id.clone(), fields, Utc::now()))?;

        if self.repo.find(&id)?.is_none() {
            return Err(BookError::Internal(format!(
                "book {} missing after insert",
                id
            )));
        }

        Logger::info("BOOK_ADDED", &[("book_id", id.as_str())]);
        Ok(id)
    }

    /// List book summaries in insertion order
    pub fn list(&self, filter: &ListFilter) -> BookResult<Vec<BookSummary>> {
        self.repo.list(filter)
    }

    /// Get a full record by id
    pub fn get(&self, id: &str) -> BookResult<Book> {
        self.repo.find(id)?.ok_or(BookError::NotFound)
    }

    /// Replace every mutable field of a book
    pub fn update(&self, id: &str, payload: BookPayload) -> BookResult<()> {
        let fields = payload.validate(BookAction::Update)?;

        if !self.repo.replace(id, fields, Utc::now())? {
            return Err(BookError::IdNotFound {
                action: BookAction::Update,
            });
        }

        Logger::info("BOOK_UPDATED", &[("book_id", id)]);
        Ok(())
    }

    /// Remove a book
    pub fn delete(&self, id: &str) -> BookResult<()> {
        if !self.repo.remove(id)? {
            return Err(BookError::IdNotFound {
                action: BookAction::Delete,
            });
        }

        Logger::info("BOOK_DELETED", &[("book_id", id)]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::repository::InMemoryBookRepository;
    use serde_json::json;

    fn service() -> BookService<InMemoryBookRepository> {
        BookService::new(InMemoryBookRepository::new())
    }

    fn payload(value: serde_json::Value) -> BookPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_add_then_get() {
        let svc = service();
        let id = svc
            .add(payload(json!({"name": "Moby Dick", "pageCount": 200, "readPage": 200})))
            .unwrap();

        let book = svc.get(&id).unwrap();
        assert_eq!(book.name, "Moby Dick");
        assert!(book.finished);
    }

    #[test]
    fn test_rejected_add_leaves_collection_unchanged() {
        let svc = service();
        let err = svc
            .add(payload(json!({"name": "X", "pageCount": 100, "readPage": 150})))
            .unwrap_err();
        assert!(matches!(err, BookError::ReadPageExceedsPageCount { .. }));
        assert!(svc.repository().is_empty().unwrap());
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let svc = service();
        let err = svc
            .update("missing", payload(json!({"pageCount": 1})))
            .unwrap_err();
        assert_eq!(
            err,
            BookError::MissingName {
                action: BookAction::Update
            }
        );
    }

    #[test]
    fn test_update_unknown_id() {
        let svc = service();
        svc.add(payload(json!({"name": "Kept"}))).unwrap();

        let err = svc
            .update("missing", payload(json!({"name": "Y"})))
            .unwrap_err();
        assert_eq!(
            err,
            BookError::IdNotFound {
                action: BookAction::Update
            }
        );
        assert_eq!(svc.list(&ListFilter::All).unwrap()[0].name, "Kept");
    }

    #[test]
    fn test_update_recomputes_finished() {
        let svc = service();
        let id = svc
            .add(payload(json!({"name": "A", "pageCount": 50, "readPage": 10})))
            .unwrap();
        let before = svc.get(&id).unwrap();
        assert!(!before.finished);

        svc.update(&id, payload(json!({"name": "A", "pageCount": 50, "readPage": 50})))
            .unwrap();

        let after = svc.get(&id).unwrap();
        assert!(after.finished);
        assert_eq!(after.inserted_at, before.inserted_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn test_delete_then_get() {
        let svc = service();
        let id = svc.add(payload(json!({"name": "Gone"}))).unwrap();

        svc.delete(&id).unwrap();
        assert_eq!(svc.get(&id).unwrap_err(), BookError::NotFound);
        assert_eq!(
            svc.delete(&id).unwrap_err(),
            BookError::IdNotFound {
                action: BookAction::Delete
            }
        );
    }

    #[test]
    fn test_list_filters() {
        let svc = service();
        svc.add(payload(json!({"name": "Moby Dick", "reading": true, "pageCount": 5, "readPage": 5})))
            .unwrap();
        svc.add(payload(json!({"name": "Dune", "reading": false, "pageCount": 5, "readPage": 1})))
            .unwrap();

        let names = |filter: ListFilter| -> Vec<String> {
            svc.list(&filter)
                .unwrap()
                .into_iter()
                .map(|s| s.name)
                .collect()
        };

        assert_eq!(names(ListFilter::Name("dick".to_string())), vec!["Moby Dick"]);
        assert_eq!(names(ListFilter::Reading(false)), vec!["Dune"]);
        assert_eq!(names(ListFilter::Finished(true)), vec!["Moby Dick"]);
        assert_eq!(names(ListFilter::All), vec!["Moby Dick", "Dune"]);
    }
}
