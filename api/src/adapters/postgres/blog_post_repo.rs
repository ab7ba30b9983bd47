//! PostgreSQL adapter for BlogPostRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{not_updated, to_utc};
use crate::domain::entities::{
    BlogPost, BlogPostId, NewBlogPost, PostStatus, ReviewRecord, UserId,
};
use crate::domain::ports::{BlogPostRepository, ResourceRepository};
use crate::entity::blog_posts;
use crate::error::DomainError;

/// PostgreSQL implementation of BlogPostRepository
pub struct PostgresBlogPostRepository {
    db: DatabaseConnection,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(post: &NewBlogPost) -> blog_posts::ActiveModel {
    blog_posts::ActiveModel {
        title: Set(post.title.clone()),
        slug: Set(post.slug.clone()),
        excerpt: Set(post.excerpt.clone()),
        content: Set(post.content.clone()),
        date: Set(post.date),
        author_id: Set(post.author_id.map(|id| id.0)),
        author: Set(post.author.clone()),
        tags: Set(Some(post.tags.clone())),
        image_url: Set(post.image_url.clone()),
        read_time: Set(post.read_time.clone()),
        status: Set(post.status.to_string()),
        reviewed_by: Set(post.reviewed_by.map(|id| id.0)),
        reviewed_at: Set(post.reviewed_at.map(|t| t.fixed_offset())),
        rejection_reason: Set(post.rejection_reason.clone()),
        published_at: Set(post.published_at.map(|t| t.fixed_offset())),
        ..Default::default()
    }
}

#[async_trait]
impl ResourceRepository<BlogPost> for PostgresBlogPostRepository {
    /// Newest first
    async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let results = blog_posts::Entity::find()
            .order_by_desc(blog_posts::Column::CreatedAt)
            .order_by_desc(blog_posts::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: BlogPostId) -> Result<Option<BlogPost>, DomainError> {
        let result = blog_posts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, post: &NewBlogPost) -> Result<BlogPost, DomainError> {
        let mut model = active_model(post);
        model.created_at = Set(Some(Utc::now().fixed_offset()));

        let result = model.insert(&self.db).await.map_err(|e| {
            let message = e.to_string();
            if message.contains("duplicate key") {
                DomainError::AlreadyExists(format!("A post with slug '{}' already exists", post.slug))
            } else {
                DomainError::Database(message)
            }
        })?;

        Ok(result.into())
    }

    async fn update(&self, id: BlogPostId, post: &NewBlogPost) -> Result<BlogPost, DomainError> {
        let mut model = active_model(post);
        model.id = Set(id.0);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| not_updated(e, "Blog post", id))?;

        Ok(result.into())
    }

    async fn delete(&self, id: BlogPostId) -> Result<(), DomainError> {
        let result = blog_posts::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Blog post {} not found", id)));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        blog_posts::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError> {
        let result = blog_posts::Entity::find()
            .filter(blog_posts::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<BlogPost>, DomainError> {
        let results = blog_posts::Entity::find()
            .filter(blog_posts::Column::Status.eq(status.to_string()))
            .order_by_desc(blog_posts::Column::CreatedAt)
            .order_by_desc(blog_posts::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn record_review(
        &self,
        id: BlogPostId,
        review: &ReviewRecord,
    ) -> Result<BlogPost, DomainError> {
        let result = blog_posts::ActiveModel {
            id: Set(id.0),
            status: Set(review.status.to_string()),
            reviewed_by: Set(review.reviewed_by.map(|id| id.0)),
            reviewed_at: Set(review.reviewed_at.map(|t| t.fixed_offset())),
            rejection_reason: Set(review.rejection_reason.clone()),
            published_at: Set(review.published_at.map(|t| t.fixed_offset())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| not_updated(e, "Blog post", id))?;

        Ok(result.into())
    }
}

/// Stored status, falling back to draft for values this build does not know
fn parse_status(post_id: i64, status: &str) -> Option<PostStatus> {
    match status.parse::<PostStatus>() {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::warn!(post_id, error = %e, "Unknown post status, treating as draft");
            None
        }
    }
}

impl From<blog_posts::Model> for BlogPost {
    fn from(model: blog_posts::Model) -> Self {
        let status = parse_status(model.id, &model.status);
        // A draft never carries a publication time
        let published_at = match status {
            Some(_) => model.published_at.map(|dt| dt.with_timezone(&Utc)),
            None => None,
        };
        BlogPost {
            id: BlogPostId(model.id),
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            date: model.date,
            author_id: model.author_id.map(UserId),
            author: model.author,
            tags: model.tags.unwrap_or_default(),
            image_url: model.image_url,
            read_time: model.read_time,
            status: status.unwrap_or(PostStatus::Draft),
            reviewed_by: model.reviewed_by.map(UserId),
            reviewed_at: model.reviewed_at.map(|dt| dt.with_timezone(&Utc)),
            rejection_reason: model.rejection_reason,
            published_at,
            created_at: to_utc(model.created_at),
        }
    }
}
