//! Blog handlers
//!
//! Public readers only ever see published posts. The dashboard routes carry
//! the editorial workflow: saving runs through the author's role, reviews
//! through the reviewer's.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;

use super::extract::ValidatedJson;
use crate::app::forms::BlogForm;
use crate::domain::entities::{BlogPost, BlogPostId, CurrentUser, ReviewDecision};
use crate::error::AppError;
use crate::AppState;

/// Blog routes mounted under `/dashboard/blog`
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/review", get(review_queue))
        .route("/:id", get(get_post).put(update).delete(delete_post))
        .route("/:id/review", post(review))
}

/// GET /blog
pub async fn list_published(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, AppError> {
    let posts = state.blog.list_published().await?;
    Ok(Json(posts))
}

/// GET /blog/:slug
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    let post = state.blog.get_published_by_slug(&slug).await?;
    Ok(Json(post))
}

/// GET /dashboard/blog
async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, AppError> {
    let posts = state.blog.list_all().await?;
    Ok(Json(posts))
}

/// GET /dashboard/blog/review
async fn review_queue(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, AppError> {
    let posts = state.blog.review_queue().await?;
    Ok(Json(posts))
}

/// GET /dashboard/blog/:id
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogPost>, AppError> {
    let post = state.blog.get(BlogPostId(id)).await?;
    Ok(Json(post))
}

/// POST /dashboard/blog
async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(form): ValidatedJson<BlogForm>,
) -> Result<(StatusCode, Json<BlogPost>), AppError> {
    let post = state.blog.save(&user, None, form).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /dashboard/blog/:id
async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<BlogForm>,
) -> Result<Json<BlogPost>, AppError> {
    let post = state.blog.save(&user, Some(BlogPostId(id)), form).await?;
    Ok(Json(post))
}

/// DELETE /dashboard/blog/:id
async fn delete_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.blog.delete(&user, BlogPostId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Approve,
    Reject,
    RequestChanges,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub action: ReviewAction,
    #[serde(default)]
    pub reason: Option<String>,
}

impl TryFrom<ReviewRequest> for ReviewDecision {
    type Error = AppError;

    fn try_from(request: ReviewRequest) -> Result<Self, Self::Error> {
        let decision = match request.action {
            ReviewAction::Approve => ReviewDecision::Approve,
            ReviewAction::RequestChanges => ReviewDecision::RequestChanges,
            ReviewAction::Reject => {
                ReviewDecision::reject(request.reason.as_deref().unwrap_or_default())?
            }
        };
        Ok(decision)
    }
}

/// POST /dashboard/blog/:id/review
async fn review(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<BlogPost>, AppError> {
    let decision = ReviewDecision::try_from(request)?;
    let post = state.blog.review(&user, BlogPostId(id), decision).await?;
    Ok(Json(post))
}
