//! Image upload handlers
//!
//! The request body is the raw file. Metadata rides in the query string and
//! the `Content-Type` header.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::domain::ports::StoredObject;
use crate::error::AppError;
use crate::AppState;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub folder: Option<String>,
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub path: String,
}

/// PUT /dashboard/uploads?folder=&file_name=
pub async fn upload(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<StoredObject>), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    let stored = state
        .uploads
        .upload(
            query.folder.as_deref(),
            &query.file_name,
            content_type,
            body.to_vec(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// DELETE /dashboard/uploads?path=
pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, AppError> {
    state.uploads.delete(&query.path).await?;
    Ok(StatusCode::NO_CONTENT)
}
