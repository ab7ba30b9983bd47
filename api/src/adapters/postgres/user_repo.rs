//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::to_utc;
use crate::domain::entities::{UserId, UserProfile, UserRole};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let result = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Role stored for a user; a missing or unknown role falls back to writer
pub fn parse_role(user_id: &UserId, role: Option<&str>) -> UserRole {
    match role.map(str::parse::<UserRole>) {
        Some(Ok(role)) => role,
        Some(Err(e)) => {
            tracing::warn!(user_id = %user_id, error = %e, "Unknown role, treating as writer");
            UserRole::Writer
        }
        None => {
            tracing::warn!(user_id = %user_id, "User has no role, treating as writer");
            UserRole::Writer
        }
    }
}

impl From<users::Model> for UserProfile {
    fn from(model: users::Model) -> Self {
        let id = UserId(model.id);
        UserProfile {
            role: parse_role(&id, model.role.as_deref()),
            id,
            email: model.email,
            display_name: model.display_name.filter(|n| !n.trim().is_empty()),
            avatar_url: model.avatar_url,
            created_at: to_utc(model.created_at),
        }
    }
}
