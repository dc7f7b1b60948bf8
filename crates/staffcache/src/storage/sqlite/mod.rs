//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for the queries and `tokio-rusqlite` to run them on a
//! dedicated connection thread. Deletes are soft: rows get a `deleted_at`
//! stamp and every read filters on it.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
