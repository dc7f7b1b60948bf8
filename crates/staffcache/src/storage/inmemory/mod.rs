//! In-memory storage backend.
//!
//! Stores employees in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; useful for development and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use staffcache::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
