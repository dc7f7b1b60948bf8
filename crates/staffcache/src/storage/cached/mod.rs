//! Cached repository decorators.
//!
//! The decorator wraps a repository with the cache-aside discipline:
//!
//! - **Reads**: check the cache first, on miss fetch from the repository
//! - **Writes**: persist to the repository, then overwrite or drop the cache entry
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("staffcache.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let service = CachedEmployeeRepository::new(repo, cache, Duration::from_secs(86_400));
//! ```

mod employee;

pub use employee::CachedEmployeeRepository;
