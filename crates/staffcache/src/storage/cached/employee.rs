//! Cached employee repository.
//!
//! Wraps an `EmployeeRepository` with a cache-aside discipline and exposes
//! the result as an `EmployeeService`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use staffcache_core::cache::{deserialize_view, employee_key, serialize_view, Cache};
use staffcache_core::employee::{
    CreateEmployeeRequest, EmployeeError, EmployeeService, EmployeeView, Result,
    UpdateEmployeeRequest,
};
use staffcache_core::storage::EmployeeRepository;

/// Cache-aside coordinator for employees.
///
/// - **Writes**: persist to the repository first (the commit point), then
///   reflect the change into the cache. Cache failures after the commit are
///   logged and swallowed.
/// - **Reads**: check the cache first, fall back to the repository on miss.
///   A failing cache read is surfaced as [`EmployeeError::Cache`].
/// - **Lists**: always served by the repository.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedEmployeeRepository<R, C>
where
    R: EmployeeRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
    repopulate_on_miss: bool,
}

impl<R, C> CachedEmployeeRepository<R, C>
where
    R: EmployeeRepository,
    C: Cache,
{
    /// Creates a new cached employee repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The authoritative store
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live applied to every cache write
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
            repopulate_on_miss: false,
        }
    }

    /// Writes the projection back to the cache after a read miss.
    pub fn with_repopulate_on_miss(mut self, enabled: bool) -> Self {
        self.repopulate_on_miss = enabled;
        self
    }

    /// Best-effort cache write of a projection.
    async fn cache_view(&self, view: &EmployeeView) {
        let bytes = match serialize_view(view) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(employee_id = view.id, error = %err, "Failed to serialize employee for cache");
                return;
            }
        };

        if let Err(err) = self
            .cache
            .set(&employee_key(view.id), &bytes, Some(self.ttl))
            .await
        {
            tracing::warn!(employee_id = view.id, error = %err, "Failed to cache employee");
        }
    }

    /// Best-effort cache invalidation.
    async fn evict(&self, id: i64) {
        if let Err(err) = self.cache.delete(&employee_key(id)).await {
            tracing::warn!(employee_id = id, error = %err, "Failed to invalidate employee cache");
        }
    }
}

#[async_trait]
impl<R, C> EmployeeService for CachedEmployeeRepository<R, C>
where
    R: EmployeeRepository + 'static,
    C: Cache + 'static,
{
    async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<EmployeeView> {
        let new_employee = request.into_new_employee()?;

        // 1. Persist to storage
        let employee = self.repository.create_employee(&new_employee).await?;

        // 2. Populate cache
        let view = EmployeeView::created(&employee);
        self.cache_view(&view).await;

        tracing::info!(employee_id = employee.id, "Employee created");
        Ok(view)
    }

    async fn get_employee(&self, id: i64) -> Result<EmployeeView> {
        let cache_key = employee_key(id);

        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_view(&bytes) {
                Ok(view) => {
                    tracing::trace!(employee_id = id, "Cache hit for employee");
                    return Ok(view);
                }
                Err(err) => {
                    // Undecodable entry - treat as a miss and drop it
                    tracing::warn!(employee_id = id, error = %err, "Cache entry deserialization failed");
                    self.evict(id).await;
                }
            },
            Ok(None) => tracing::trace!(employee_id = id, "Cache miss for employee"),
            Err(err) => {
                tracing::warn!(employee_id = id, error = %err, "Cache read failed");
                return Err(EmployeeError::Cache(err));
            }
        }

        let employee = self
            .repository
            .get_employee(id)
            .await?
            .ok_or(EmployeeError::NotFound { id })?;

        let view = EmployeeView::created(&employee);
        if self.repopulate_on_miss {
            self.cache_view(&view).await;
        }

        Ok(view)
    }

    async fn update_employee(
        &self,
        id: i64,
        request: UpdateEmployeeRequest,
    ) -> Result<EmployeeView> {
        // An unknown id is reported before the body is validated
        let mut employee = self
            .repository
            .get_employee(id)
            .await?
            .ok_or(EmployeeError::NotFound { id })?;

        let patch = request.into_patch()?;
        patch.apply_to(&mut employee);
        employee.updated_at = Utc::now();

        // 1. Persist to storage
        self.repository
            .replace_employee(&employee)
            .await
            .map_err(|err| EmployeeError::from_repository(err, id))?;

        // 2. Overwrite cache entry with a fresh TTL
        let view = EmployeeView::updated(&employee);
        self.cache_view(&view).await;

        tracing::info!(employee_id = id, "Employee updated");
        Ok(view)
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        // 1. Delete from storage
        self.repository
            .delete_employee(id)
            .await
            .map_err(|err| EmployeeError::from_repository(err, id))?;

        // 2. Invalidate cache
        self.evict(id).await;

        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<EmployeeView>> {
        let employees = self.repository.list_employees().await?;

        tracing::debug!(count = employees.len(), "Listed employees");
        Ok(employees.iter().map(EmployeeView::created).collect())
    }
}
