//! Blog service
//!
//! The editorial workflow: authors save posts (create or update), reviewers
//! approve, reject or bounce posts waiting in the queue, and the public site
//! only ever sees published posts.

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::app::forms::BlogForm;
use crate::app::post_content::{parse_tags, slugify, DerivedFields};
use crate::app::query_cache::{QueryCache, QueryKey};
use crate::domain::entities::{
    BlogPost, BlogPostId, CurrentUser, NewBlogPost, PostStatus, Resource, ReviewDecision,
};
use crate::domain::ports::BlogPostRepository;
use crate::error::{AppError, DomainError};

const KEY: &str = BlogPost::KEY;

pub struct BlogService {
    posts: Arc<dyn BlogPostRepository>,
    cache: Arc<QueryCache>,
    default_author: String,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn BlogPostRepository>,
        cache: Arc<QueryCache>,
        default_author: String,
    ) -> Self {
        Self {
            posts,
            cache,
            default_author,
        }
    }

    /// Create (`id = None`) or update a post from the editor form.
    ///
    /// The stored status is what the author's role allows, not necessarily
    /// what was requested. Slugs are derived once at creation.
    pub async fn save(
        &self,
        author: &CurrentUser,
        id: Option<BlogPostId>,
        form: BlogForm,
    ) -> Result<BlogPost, AppError> {
        form.validate()?;

        let status = PostStatus::resolve_submission(form.status, author.role)?;
        if status != form.status {
            tracing::info!(
                user_id = %author.id,
                role = %author.role,
                requested = %form.status,
                stored = %status,
                "Submission routed to review"
            );
        }

        let existing = match id {
            Some(id) => Some(
                self.posts
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", id)))?,
            ),
            None => None,
        };

        let slug = match &existing {
            Some(post) => post.slug.clone(),
            None => slugify(&form.title),
        };
        if slug.is_empty() {
            return Err(AppError::validation(
                "title: Title must contain letters or digits",
            ));
        }

        let derived = DerivedFields::compute(form.content.as_deref(), form.image_url.as_deref());
        if derived.image_url.is_empty() {
            tracing::debug!(slug = %slug, "No cover image found, saving without one");
        }

        let display_name = form
            .author_override()
            .or_else(|| author.display_name.clone())
            .unwrap_or_else(|| self.default_author.clone());

        let now = Utc::now();
        let previous_published_at = existing.as_ref().and_then(|p| p.published_at);
        let published_at = match status {
            PostStatus::Published => previous_published_at.or(Some(now)),
            _ => None,
        };

        // Reviewer trail only survives as a complete pair
        let (reviewed_by, reviewed_at) = match existing.as_ref() {
            Some(BlogPost {
                reviewed_by: Some(by),
                reviewed_at: Some(at),
                ..
            }) => (Some(*by), Some(*at)),
            _ => (None, None),
        };

        let input = NewBlogPost {
            title: form.title.trim().to_string(),
            slug,
            excerpt: derived.excerpt,
            content: form.content,
            date: form.date,
            author_id: Some(author.id),
            author: display_name,
            tags: parse_tags(&form.tags),
            image_url: derived.image_url,
            read_time: Some(derived.read_time),
            status,
            reviewed_by,
            reviewed_at,
            rejection_reason: None,
            published_at,
        };

        let post = match existing {
            Some(post) => self.posts.update(post.id, &input).await?,
            None => self.posts.create(&input).await?,
        };
        self.cache.invalidate(KEY);

        tracing::info!(
            post_id = %post.id,
            slug = %post.slug,
            status = %post.status,
            updated = id.is_some(),
            "Blog post saved"
        );
        Ok(post)
    }

    /// Apply a reviewer's decision to a post in the review queue
    pub async fn review(
        &self,
        reviewer: &CurrentUser,
        id: BlogPostId,
        decision: ReviewDecision,
    ) -> Result<BlogPost, AppError> {
        if !reviewer.role.can_review() {
            return Err(AppError::Forbidden);
        }
        if let ReviewDecision::Reject { reason } = &decision {
            if reason.trim().is_empty() {
                return Err(AppError::validation(
                    "Please provide a reason for rejection",
                ));
            }
        }

        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", id)))?;

        let record = decision.apply(&post, reviewer.id, Utc::now())?;
        let updated = self.posts.record_review(id, &record).await?;
        self.cache.invalidate(KEY);

        match &decision {
            ReviewDecision::RequestChanges => tracing::info!(
                post_id = %id,
                reviewer_id = %reviewer.id,
                "Changes requested, post returned to draft"
            ),
            _ => tracing::info!(
                post_id = %id,
                reviewer_id = %reviewer.id,
                status = %updated.status,
                "Blog post reviewed"
            ),
        }
        Ok(updated)
    }

    /// Every post, newest first
    pub async fn list_all(&self) -> Result<Vec<BlogPost>, AppError> {
        let posts = self
            .cache
            .fetch(QueryKey::list(KEY), || self.posts.list())
            .await?;
        Ok(posts)
    }

    /// Posts waiting for a reviewer, newest first
    pub async fn review_queue(&self) -> Result<Vec<BlogPost>, AppError> {
        self.list_status(PostStatus::PendingReview).await
    }

    /// Posts visible on the public site, newest first
    pub async fn list_published(&self) -> Result<Vec<BlogPost>, AppError> {
        self.list_status(PostStatus::Published).await
    }

    async fn list_status(&self, status: PostStatus) -> Result<Vec<BlogPost>, AppError> {
        let posts = self
            .cache
            .fetch(QueryKey::filter(KEY, status.to_string()), || {
                self.posts.list_by_status(status)
            })
            .await?;
        Ok(posts)
    }

    /// Dashboard detail, any status
    pub async fn get(&self, id: BlogPostId) -> Result<BlogPost, AppError> {
        let post = self
            .cache
            .fetch(QueryKey::detail(KEY, id), || self.posts.find_by_id(id))
            .await?;
        post.ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", id)))
    }

    /// Public detail; anything not published does not exist here
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        let post = self
            .cache
            .fetch(QueryKey::slug(KEY, slug), || self.posts.find_by_slug(slug))
            .await?;
        post.filter(BlogPost::is_public)
            .ok_or_else(|| AppError::NotFound(format!("Blog post '{}' not found", slug)))
    }

    pub async fn delete(&self, user: &CurrentUser, id: BlogPostId) -> Result<(), AppError> {
        if !user.role.can_delete_posts() {
            return Err(AppError::Forbidden);
        }

        self.posts.delete(id).await?;
        self.cache.invalidate(KEY);

        tracing::info!(post_id = %id, user_id = %user.id, "Blog post deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.posts.count().await
    }

    pub async fn count_pending(&self) -> Result<u64, DomainError> {
        let pending = self.posts.list_by_status(PostStatus::PendingReview).await?;
        Ok(pending.len() as u64)
    }
}
