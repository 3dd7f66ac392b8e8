//! bookshelf - book records and file uploads over HTTP
//!
//! An axum service with an in-memory book store and a local upload
//! directory.

pub mod books;
pub mod cli;
pub mod file_storage;
pub mod http_server;
pub mod observability;
