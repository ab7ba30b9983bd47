//! Site-wide public handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::StorageProvider;
use crate::AppState;

/// Public settings the site front end needs at startup
#[derive(Debug, Clone, Serialize)]
pub struct SiteSettings {
    /// Google Analytics measurement id; analytics stay off when absent
    pub analytics_measurement_id: Option<String>,
    pub storage_provider: StorageProvider,
}

/// GET /site
pub async fn settings(State(state): State<AppState>) -> Json<SiteSettings> {
    Json(state.site.as_ref().clone())
}

