//! Dashboard session middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::error::AppError;
use crate::AppState;

/// Extract the access token from the Authorization header
fn extract_access_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Session middleware
///
/// Resolves the access token into the current user and injects it into
/// request extensions. Requests without a valid session get a 401 that
/// points the client at the login page.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_access_token(&request).ok_or(AppError::Unauthorized)?;

    let user = state.sessions.current_user(token).await?;
    tracing::debug!(user_id = %user.id, role = %user.role, "Session resolved");

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
