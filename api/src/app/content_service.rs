//! Content Service
//!
//! Pass-through CRUD for the flat content types (products, learning
//! resources, portfolio projects, testimonials, service packages).
//! Reads go through the query cache; every successful mutation invalidates
//! the resource's entries after the backend acknowledged it.

use std::sync::Arc;

use crate::app::query_cache::{QueryCache, QueryKey};
use crate::domain::entities::{LearningResource, Resource};
use crate::domain::ports::ResourceRepository;
use crate::error::{AppError, DomainError};

/// Service for one content type
pub struct ContentService<T: Resource> {
    repo: Arc<dyn ResourceRepository<T>>,
    cache: Arc<QueryCache>,
}

impl<T: Resource> ContentService<T> {
    pub fn new(repo: Arc<dyn ResourceRepository<T>>, cache: Arc<QueryCache>) -> Self {
        Self { repo, cache }
    }

    /// All records in the table's default order
    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        let records = self
            .cache
            .fetch(QueryKey::list(T::KEY), || self.repo.list())
            .await?;
        Ok(records)
    }

    pub async fn get(&self, id: T::Id) -> Result<T, AppError> {
        let record = self
            .cache
            .fetch(QueryKey::detail(T::KEY, id), || self.repo.find_by_id(id))
            .await?;
        record.ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::KEY, id)))
    }

    pub async fn create(&self, input: T::Input) -> Result<T, AppError> {
        let record = self.repo.create(&input).await?;
        self.cache.invalidate(T::KEY);

        tracing::info!(resource = T::KEY, id = %record.id(), "Record created");
        Ok(record)
    }

    pub async fn update(&self, id: T::Id, input: T::Input) -> Result<T, AppError> {
        let record = self.repo.update(id, &input).await?;
        self.cache.invalidate(T::KEY);

        tracing::info!(resource = T::KEY, id = %id, "Record updated");
        Ok(record)
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        self.cache.invalidate(T::KEY);

        tracing::info!(resource = T::KEY, id = %id, "Record deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repo.count().await
    }
}

impl ContentService<LearningResource> {
    /// Learning hub filter by resource type ("Video", "Article", ...)
    pub async fn list_by_type(&self, kind: &str) -> Result<Vec<LearningResource>, AppError> {
        let key = QueryKey::filter(LearningResource::KEY, format!("type:{}", kind));
        let resources = self
            .cache
            .fetch(key, || async {
                let all = self.repo.list().await?;
                Ok::<_, DomainError>(all.into_iter().filter(|r| r.is_kind(kind)).collect())
            })
            .await?;
        Ok(resources)
    }
}
