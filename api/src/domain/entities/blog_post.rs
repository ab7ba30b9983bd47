//! Blog post domain entity
//!
//! Blog posts are the only content type with a lifecycle. Authors save posts
//! as drafts or submit them; ghost writers always land in the review queue,
//! and reviewers move queued posts to published, rejected or back to draft.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::user::{UserId, UserRole};
use super::Resource;
use crate::error::DomainError;

record_id!(
    /// Unique identifier for a blog post
    BlogPostId
);

/// Editorial status of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    PendingReview,
    Published,
    Rejected,
}

impl PostStatus {
    /// Resolve the status an author asked for into the status that is stored.
    ///
    /// Roles that cannot publish are coerced into review instead of being
    /// refused. Authors never reject their own posts.
    pub fn resolve_submission(requested: PostStatus, role: UserRole) -> Result<Self, DomainError> {
        match requested {
            PostStatus::Draft => Ok(PostStatus::Draft),
            PostStatus::PendingReview => Ok(PostStatus::PendingReview),
            PostStatus::Published if role.can_publish() => Ok(PostStatus::Published),
            PostStatus::Published => Ok(PostStatus::PendingReview),
            PostStatus::Rejected => Err(DomainError::Validation(
                "Posts can only be rejected through review".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::PendingReview => write!(f, "pending_review"),
            PostStatus::Published => write!(f, "published"),
            PostStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "pending_review" | "pendingreview" => Ok(PostStatus::PendingReview),
            "published" => Ok(PostStatus::Published),
            "rejected" => Ok(PostStatus::Rejected),
            _ => Err(format!("Unknown post status: {}", s)),
        }
    }
}

/// A blog post as stored
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    /// URL key, derived from the title once at creation
    pub slug: String,
    pub excerpt: String,
    /// Rich text (HTML)
    pub content: Option<String>,
    /// Publish date shown on the site
    pub date: NaiveDate,
    /// Nullable for legacy posts written before authors were tracked
    pub author_id: Option<UserId>,
    /// Display name
    pub author: String,
    pub tags: Vec<String>,
    /// Cover image URL, empty when none
    pub image_url: String,
    pub read_time: Option<String>,
    pub status: PostStatus,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Check the review invariants of a stored post
    pub fn is_consistent(&self) -> bool {
        let published_ok = (self.status == PostStatus::Published) == self.published_at.is_some();
        let rejection_ok = match self.status {
            PostStatus::Rejected => self
                .rejection_reason
                .as_deref()
                .is_some_and(|r| !r.trim().is_empty()),
            _ => self.rejection_reason.is_none(),
        };
        let reviewer_ok = self.reviewed_by.is_some() == self.reviewed_at.is_some();

        published_ok && rejection_ok && reviewer_ok
    }

    pub fn is_public(&self) -> bool {
        self.status == PostStatus::Published
    }
}

impl Resource for BlogPost {
    const KEY: &'static str = "blog_posts";
    type Id = BlogPostId;
    type Input = NewBlogPost;

    fn id(&self) -> BlogPostId {
        self.id
    }
}

/// Complete payload written on create or update
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub date: NaiveDate,
    pub author_id: Option<UserId>,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub read_time: Option<String>,
    pub status: PostStatus,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// What a reviewer decided about a post in the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: String },
    /// Send the post back to its author as a draft
    RequestChanges,
}

/// Review fields written when a decision is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub status: PostStatus,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ReviewDecision {
    /// Build a rejection, requiring a non-blank reason
    pub fn reject(reason: &str) -> Result<Self, DomainError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(DomainError::Validation(
                "Please provide a reason for rejection".to_string(),
            ));
        }
        Ok(ReviewDecision::Reject {
            reason: reason.to_string(),
        })
    }

    pub fn target_status(&self) -> PostStatus {
        match self {
            ReviewDecision::Approve => PostStatus::Published,
            ReviewDecision::Reject { .. } => PostStatus::Rejected,
            ReviewDecision::RequestChanges => PostStatus::Draft,
        }
    }

    /// Compute the review fields for a post awaiting review
    pub fn apply(
        &self,
        post: &BlogPost,
        reviewer: UserId,
        now: DateTime<Utc>,
    ) -> Result<ReviewRecord, DomainError> {
        if post.status != PostStatus::PendingReview {
            return Err(DomainError::Conflict(format!(
                "Post '{}' is not awaiting review (status: {})",
                post.title, post.status
            )));
        }

        let record = match self {
            ReviewDecision::Approve => ReviewRecord {
                status: PostStatus::Published,
                reviewed_by: Some(reviewer),
                reviewed_at: Some(now),
                rejection_reason: None,
                published_at: Some(now),
            },
            ReviewDecision::Reject { reason } => {
                if reason.trim().is_empty() {
                    return Err(DomainError::Validation(
                        "Please provide a reason for rejection".to_string(),
                    ));
                }
                ReviewRecord {
                    status: PostStatus::Rejected,
                    reviewed_by: Some(reviewer),
                    reviewed_at: Some(now),
                    rejection_reason: Some(reason.trim().to_string()),
                    published_at: None,
                }
            }
            ReviewDecision::RequestChanges => ReviewRecord {
                status: PostStatus::Draft,
                reviewed_by: None,
                reviewed_at: None,
                rejection_reason: None,
                published_at: None,
            },
        };

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_post(status: PostStatus) -> BlogPost {
        BlogPost {
            id: BlogPostId(1),
            title: "Test Post".to_string(),
            slug: "test-post".to_string(),
            excerpt: "Body...".to_string(),
            content: Some("<p>Body</p>".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            author_id: Some(UserId(Uuid::new_v4())),
            author: "Author".to_string(),
            tags: vec!["Tech".to_string()],
            image_url: String::new(),
            read_time: Some("1 min read".to_string()),
            status,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
            published_at: None,
            created_at: Utc::now(),
        }
    }

    fn reviewer() -> UserId {
        UserId(Uuid::new_v4())
    }

    #[test]
    fn ghost_writer_publish_is_coerced_to_review() {
        let status =
            PostStatus::resolve_submission(PostStatus::Published, UserRole::GhostWriter).unwrap();
        assert_eq!(status, PostStatus::PendingReview);
    }

    #[test]
    fn editorial_roles_publish_directly() {
        for role in [
            UserRole::Owner,
            UserRole::Admin,
            UserRole::Editor,
            UserRole::Writer,
            UserRole::Team,
        ] {
            let status = PostStatus::resolve_submission(PostStatus::Published, role).unwrap();
            assert_eq!(status, PostStatus::Published);
        }
    }

    #[test]
    fn drafts_stay_drafts_for_everyone() {
        let status =
            PostStatus::resolve_submission(PostStatus::Draft, UserRole::GhostWriter).unwrap();
        assert_eq!(status, PostStatus::Draft);
    }

    #[test]
    fn authors_cannot_request_rejected() {
        let result = PostStatus::resolve_submission(PostStatus::Rejected, UserRole::Owner);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn approve_sets_publication_and_reviewer_fields() {
        let post = make_post(PostStatus::PendingReview);
        let who = reviewer();
        let now = Utc::now();

        let record = ReviewDecision::Approve.apply(&post, who, now).unwrap();

        assert_eq!(record.status, PostStatus::Published);
        assert_eq!(record.reviewed_by, Some(who));
        assert_eq!(record.reviewed_at, Some(now));
        assert_eq!(record.published_at, Some(now));
        assert!(record.rejection_reason.is_none());
    }

    #[test]
    fn reject_records_reason_and_clears_publication() {
        let post = make_post(PostStatus::PendingReview);
        let decision = ReviewDecision::reject("  Needs sources ").unwrap();

        let record = decision.apply(&post, reviewer(), Utc::now()).unwrap();

        assert_eq!(record.status, PostStatus::Rejected);
        assert_eq!(record.rejection_reason.as_deref(), Some("Needs sources"));
        assert!(record.published_at.is_none());
        assert!(record.reviewed_by.is_some() && record.reviewed_at.is_some());
    }

    #[test]
    fn reject_without_reason_is_a_validation_error() {
        assert!(matches!(
            ReviewDecision::reject("   "),
            Err(DomainError::Validation(_))
        ));

        let post = make_post(PostStatus::PendingReview);
        let blank = ReviewDecision::Reject {
            reason: String::new(),
        };
        assert!(matches!(
            blank.apply(&post, reviewer(), Utc::now()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn request_changes_returns_to_draft_without_reviewer_trail() {
        let post = make_post(PostStatus::PendingReview);

        let record = ReviewDecision::RequestChanges
            .apply(&post, reviewer(), Utc::now())
            .unwrap();

        assert_eq!(record.status, PostStatus::Draft);
        assert!(record.reviewed_by.is_none());
        assert!(record.reviewed_at.is_none());
        assert!(record.published_at.is_none());
    }

    #[test]
    fn only_pending_posts_can_be_reviewed() {
        for status in [PostStatus::Draft, PostStatus::Published, PostStatus::Rejected] {
            let post = make_post(status);
            let result = ReviewDecision::Approve.apply(&post, reviewer(), Utc::now());
            assert!(matches!(result, Err(DomainError::Conflict(_))), "{}", status);
        }
    }

    #[test]
    fn consistency_checks_publication_invariant() {
        let mut post = make_post(PostStatus::Published);
        assert!(!post.is_consistent());
        post.published_at = Some(Utc::now());
        assert!(post.is_consistent());

        let mut draft = make_post(PostStatus::Draft);
        draft.published_at = Some(Utc::now());
        assert!(!draft.is_consistent());
    }

    #[test]
    fn consistency_checks_rejection_and_reviewer_pairs() {
        let mut post = make_post(PostStatus::Rejected);
        assert!(!post.is_consistent());
        post.rejection_reason = Some("Off topic".to_string());
        assert!(post.is_consistent());

        post.reviewed_by = Some(reviewer());
        assert!(!post.is_consistent());
        post.reviewed_at = Some(Utc::now());
        assert!(post.is_consistent());
    }

    #[test]
    fn post_status_display_and_from_str() {
        assert_eq!(PostStatus::PendingReview.to_string(), "pending_review");
        assert_eq!(
            "pending_review".parse::<PostStatus>().unwrap(),
            PostStatus::PendingReview
        );
        assert!("archived".parse::<PostStatus>().is_err());
    }
}
