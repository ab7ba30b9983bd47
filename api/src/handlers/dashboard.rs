//! Dashboard overview handlers

use axum::{extract::State, Extension, Json};

use crate::app::DashboardStats;
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::AppState;

/// GET /dashboard/me
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<CurrentUser> {
    Json(user)
}

/// GET /dashboard/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let stats = state.dashboard.stats().await?;
    Ok(Json(stats))
}
