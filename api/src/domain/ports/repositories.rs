//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    BlogPost, BlogPostId, PostStatus, Resource, ReviewRecord, UserId, UserProfile,
};
use crate::error::DomainError;

/// Pass-through CRUD for one content table.
///
/// `list` returns rows in the table's default order. A missing row is
/// `DomainError::NotFound` on update and delete, `None` on lookup.
#[async_trait]
pub trait ResourceRepository<T: Resource>: Send + Sync {
    /// List all records in default order
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    /// Find a record by ID
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError>;

    /// Insert a record
    async fn create(&self, input: &T::Input) -> Result<T, DomainError>;

    /// Replace a record's fields
    async fn update(&self, id: T::Id, input: &T::Input) -> Result<T, DomainError>;

    /// Hard delete a record
    async fn delete(&self, id: T::Id) -> Result<(), DomainError>;

    /// Count all records
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for blog posts, with the editorial queries on top of CRUD
#[async_trait]
pub trait BlogPostRepository: ResourceRepository<BlogPost> {
    /// Find a post by its URL slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError>;

    /// List posts in a status, newest first
    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<BlogPost>, DomainError>;

    /// Write the fields produced by a review decision
    async fn record_review(
        &self,
        id: BlogPostId,
        review: &ReviewRecord,
    ) -> Result<BlogPost, DomainError>;
}

/// Repository for dashboard user profiles
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a profile by auth user ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError>;
}
