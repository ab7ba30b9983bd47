//! Session service
//!
//! Resolves a dashboard access token into the current user: the hosted auth
//! service vouches for the identity, the `users` table supplies the role.

use std::sync::Arc;

use crate::domain::entities::CurrentUser;
use crate::domain::ports::{AuthProvider, UserRepository};
use crate::error::{AppError, AuthError};

pub struct SessionService {
    auth: Arc<dyn AuthProvider>,
    users: Arc<dyn UserRepository>,
}

impl SessionService {
    pub fn new(auth: Arc<dyn AuthProvider>, users: Arc<dyn UserRepository>) -> Self {
        Self { auth, users }
    }

    /// Current user for `access_token`.
    ///
    /// An invalid session or a user without a profile row is `Unauthorized`;
    /// an unreachable auth service surfaces as an auth error.
    pub async fn current_user(&self, access_token: &str) -> Result<CurrentUser, AppError> {
        let auth_user = self
            .auth
            .get_user(access_token)
            .await
            .map_err(|e| match e {
                AuthError::InvalidSession => AppError::Unauthorized,
                AuthError::Api {
                    status: 401 | 403, ..
                } => AppError::Unauthorized,
                e => AppError::Auth(e),
            })?;

        let profile = self.users.find_by_id(&auth_user.id).await?;
        match profile {
            Some(profile) => Ok(profile.into()),
            None => {
                tracing::warn!(user_id = %auth_user.id, "Authenticated user has no profile");
                Err(AppError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AuthUser, UserRole};
    use crate::domain::ports::MockAuthProvider;
    use crate::test_utils::{test_profile, InMemoryUserRepository};

    fn auth_returning(user: AuthUser) -> MockAuthProvider {
        let mut auth = MockAuthProvider::new();
        auth.expect_get_user()
            .returning(move |_| Ok(user.clone()));
        auth
    }

    #[tokio::test]
    async fn resolves_profile_role_and_name() {
        let profile = test_profile(UserRole::Editor);
        let users = Arc::new(InMemoryUserRepository::new().with_profile(profile.clone()));
        let auth = auth_returning(AuthUser {
            id: profile.id,
            email: Some(profile.email.clone()),
        });
        let service = SessionService::new(Arc::new(auth), users);

        let user = service.current_user("token").await.unwrap();
        assert_eq!(user.id, profile.id);
        assert_eq!(user.role, UserRole::Editor);
        assert_eq!(user.display_name, profile.display_name);
    }

    #[tokio::test]
    async fn invalid_session_is_unauthorized() {
        let mut auth = MockAuthProvider::new();
        auth.expect_get_user()
            .returning(|_| Err(AuthError::InvalidSession));
        let service = SessionService::new(Arc::new(auth), Arc::new(InMemoryUserRepository::new()));

        assert!(matches!(
            service.current_user("expired").await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn missing_profile_is_unauthorized() {
        let profile = test_profile(UserRole::Writer);
        let auth = auth_returning(AuthUser {
            id: profile.id,
            email: None,
        });
        let service = SessionService::new(Arc::new(auth), Arc::new(InMemoryUserRepository::new()));

        assert!(matches!(
            service.current_user("token").await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn auth_outage_is_not_reported_as_logout() {
        let mut auth = MockAuthProvider::new();
        auth.expect_get_user().returning(|_| {
            Err(AuthError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        let service = SessionService::new(Arc::new(auth), Arc::new(InMemoryUserRepository::new()));

        assert!(matches!(
            service.current_user("token").await,
            Err(AppError::Auth(AuthError::Api { status: 503, .. }))
        ));
    }
}
