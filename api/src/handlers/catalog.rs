//! Catalog handlers
//!
//! Public reads and dashboard CRUD for the flat content types. One set of
//! generic handlers serves every type through `CatalogRoute`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::extract::ValidatedJson;
use crate::app::forms::{
    ContentForm, LearningForm, PortfolioForm, ProductForm, ServicePackageForm, TestimonialForm,
};
use crate::app::ContentService;
use crate::domain::entities::{
    LearningResource, PortfolioProject, Product, Resource, ServicePackage, Testimonial,
};
use crate::error::AppError;
use crate::AppState;

/// A content type exposed over HTTP
pub trait CatalogRoute: Resource + Serialize {
    /// Dashboard editor form
    type Form: ContentForm<Output = Self::Input>;

    fn service(state: &AppState) -> &ContentService<Self>;
}

impl CatalogRoute for Product {
    type Form = ProductForm;

    fn service(state: &AppState) -> &ContentService<Self> {
        &state.products
    }
}

impl CatalogRoute for LearningResource {
    type Form = LearningForm;

    fn service(state: &AppState) -> &ContentService<Self> {
        &state.learning
    }
}

impl CatalogRoute for PortfolioProject {
    type Form = PortfolioForm;

    fn service(state: &AppState) -> &ContentService<Self> {
        &state.portfolio
    }
}

impl CatalogRoute for Testimonial {
    type Form = TestimonialForm;

    fn service(state: &AppState) -> &ContentService<Self> {
        &state.testimonials
    }
}

impl CatalogRoute for ServicePackage {
    type Form = ServicePackageForm;

    fn service(state: &AppState) -> &ContentService<Self> {
        &state.services
    }
}

/// Dashboard CRUD routes for one content type, nested under its path
pub fn dashboard_routes<R: CatalogRoute>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(get_one::<R>).put(update::<R>).delete(remove::<R>))
}

/// GET /{resource}
pub async fn list<R: CatalogRoute>(State(state): State<AppState>) -> Result<Json<Vec<R>>, AppError> {
    let records = R::service(&state).list().await?;
    Ok(Json(records))
}

/// GET /{resource}/:id
pub async fn get_one<R: CatalogRoute>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<R>, AppError> {
    let record = R::service(&state).get(R::Id::from(id)).await?;
    Ok(Json(record))
}

/// POST /dashboard/{resource}
pub async fn create<R: CatalogRoute>(
    State(state): State<AppState>,
    ValidatedJson(form): ValidatedJson<R::Form>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let record = R::service(&state).create(form.into_input()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /dashboard/{resource}/:id
pub async fn update<R: CatalogRoute>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<R::Form>,
) -> Result<Json<R>, AppError> {
    let record = R::service(&state)
        .update(R::Id::from(id), form.into_input())
        .await?;
    Ok(Json(record))
}

/// DELETE /dashboard/{resource}/:id
pub async fn remove<R: CatalogRoute>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    R::service(&state).delete(R::Id::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct LearnQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /learn
///
/// Learning hub, optionally filtered by resource type.
pub async fn list_learning(
    State(state): State<AppState>,
    Query(query): Query<LearnQuery>,
) -> Result<Json<Vec<LearningResource>>, AppError> {
    let resources = match query.kind.as_deref().map(str::trim) {
        Some(kind) if !kind.is_empty() && !kind.eq_ignore_ascii_case("all") => {
            state.learning.list_by_type(kind).await?
        }
        _ => state.learning.list().await?,
    };
    Ok(Json(resources))
}
