//! Hosted auth port trait
//!
//! Sessions are issued and refreshed by the hosted auth service; the API only
//! asks it who owns an access token.

use async_trait::async_trait;

use crate::domain::entities::AuthUser;
use crate::error::AuthError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve an access token to its user.
    ///
    /// Returns `AuthError::InvalidSession` for missing, expired or revoked tokens.
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;
}
