//! Application state.
//!
//! Holds the employee service behind a trait object. The concrete store and
//! cache are chosen at compile time via feature flags.

use std::sync::Arc;

use staffcache_core::employee::EmployeeService;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside employee service.
    pub employees: Arc<dyn EmployeeService>,
}

impl AppState {
    /// Creates an AppState around an already-built service.
    pub fn from_service(employees: Arc<dyn EmployeeService>) -> Self {
        Self { employees }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::{CachedEmployeeRepository, SqliteRepository};

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with in-memory cache");

            let service = CachedEmployeeRepository::new(sqlite_repo, memory_cache, config.cache_ttl())
                .with_repopulate_on_miss(config.cache_repopulate_on_miss);

            Ok(Self::from_service(Arc::new(service)))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::{CachedEmployeeRepository, SqliteRepository};

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with Redis cache");

            let service = CachedEmployeeRepository::new(sqlite_repo, redis_cache, config.cache_ttl())
                .with_repopulate_on_miss(config.cache_repopulate_on_miss);

            Ok(Self::from_service(Arc::new(service)))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::{CachedEmployeeRepository, InMemoryRepository};

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!("Using in-memory storage with in-memory cache");

            let service =
                CachedEmployeeRepository::new(inmemory_repo, memory_cache, config.cache_ttl())
                    .with_repopulate_on_miss(config.cache_repopulate_on_miss);

            Ok(Self::from_service(Arc::new(service)))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::{CachedEmployeeRepository, InMemoryRepository};

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!("Using in-memory storage with Redis cache");

            let service =
                CachedEmployeeRepository::new(inmemory_repo, redis_cache, config.cache_ttl())
                    .with_repopulate_on_miss(config.cache_repopulate_on_miss);

            Ok(Self::from_service(Arc::new(service)))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
