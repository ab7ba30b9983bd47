//! Request extractors

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its form validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::StatusCode, routing::post, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Form {
        #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
        name: String,
    }

    async fn echo(ValidatedJson(form): ValidatedJson<Form>) -> String {
        form.name
    }

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_reaches_handler() {
        let app = Router::new().route("/", post(echo));

        let response = app.oneshot(json_request(r#"{"name":"Kasir"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn failed_validation_is_bad_request() {
        let app = Router::new().route("/", post(echo));

        let response = app.oneshot(json_request(r#"{"name":"K"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = Router::new().route("/", post(echo));

        let response = app.oneshot(json_request(r#"{"name":"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
