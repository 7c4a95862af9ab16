//! bookshelf - an in-memory book catalogue served over a JSON REST API

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
