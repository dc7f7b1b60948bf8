//! Redis cache backend implementation.
//!
//! Distributed cache for multi-instance deployments, backed by a
//! `ConnectionManager` that reconnects on its own.

mod cache;
mod error;

pub use cache::RedisCache;
