//! Unified error types for the WednesDev API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AuthError`: Hosted auth service errors
//! - `StorageError`: Object storage errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Path the dashboard client sends users to when a session is missing
pub const LOGIN_PATH: &str = "/login";

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Hosted auth service errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Session is missing or expired")]
    InvalidSession,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Object storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upload failed: {status} - {message}")]
    Upload { status: u16, message: String },

    #[error("Delete failed: {status} - {message}")]
    Delete { status: u16, message: String },

    #[error("Invalid object path: {0}")]
    InvalidPath(String),

    #[error("Storage misconfigured: {0}")]
    Misconfigured(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a validation failure raised outside a form schema
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Domain(DomainError::Validation(msg.into()))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, msg)
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::validation(message)
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    login_path: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Forbidden(msg)) => {
                (StatusCode::FORBIDDEN, "Forbidden", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "Conflict", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Auth(e) => match e {
                AuthError::InvalidSession => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
                _ => {
                    tracing::error!("Auth service error: {}", e);
                    (StatusCode::BAD_GATEWAY, "Auth service error", None)
                }
            },
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                match e {
                    StorageError::InvalidPath(msg) => {
                        (StatusCode::BAD_REQUEST, "Invalid object path", Some(msg.clone()))
                    }
                    StorageError::Upload { message, .. } | StorageError::Delete { message, .. } => {
                        // Surface the provider message so the user can retry knowingly
                        (StatusCode::BAD_GATEWAY, "Storage service error", Some(message.clone()))
                    }
                    StorageError::Misconfigured(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Storage service error",
                        None,
                    ),
                    StorageError::Request(_) => {
                        (StatusCode::BAD_GATEWAY, "Storage service error", None)
                    }
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let login_path = (status == StatusCode::UNAUTHORIZED).then_some(LOGIN_PATH);

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            login_path,
        });

        (status, body).into_response()
    }
}
