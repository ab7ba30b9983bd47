//! Hosted auth (Supabase GoTrue) client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::entities::AuthUser;
use crate::domain::ports::AuthProvider;
use crate::error::AuthError;

/// Verifies access tokens against `GET /auth/v1/user`
pub struct SupabaseAuthClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuthClient {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthClient {
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let response = self
            .http
            .get(self.user_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| AuthError::Deserialization(e.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidSession),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(AuthError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
