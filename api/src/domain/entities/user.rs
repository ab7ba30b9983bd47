//! User domain entity
//!
//! Dashboard users and their editorial roles. Identity comes from the hosted
//! auth service; the role and display name live in the `users` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user (same as the auth user id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editorial role of a dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Admin,
    Editor,
    Writer,
    /// Writes on behalf of others; every submission goes through review
    GhostWriter,
    Team,
}

impl UserRole {
    /// Whether posts submitted by this role go live without review
    pub fn can_publish(&self) -> bool {
        match self {
            UserRole::Owner
            | UserRole::Admin
            | UserRole::Editor
            | UserRole::Writer
            | UserRole::Team => true,
            UserRole::GhostWriter => false,
        }
    }

    /// Whether this role may approve, reject or bounce posts in review
    pub fn can_review(&self) -> bool {
        match self {
            UserRole::Owner
            | UserRole::Admin
            | UserRole::Editor
            | UserRole::Writer
            | UserRole::Team => true,
            UserRole::GhostWriter => false,
        }
    }

    /// Whether this role may hard-delete blog posts
    pub fn can_delete_posts(&self) -> bool {
        match self {
            UserRole::Owner
            | UserRole::Admin
            | UserRole::Editor
            | UserRole::Writer
            | UserRole::Team => true,
            UserRole::GhostWriter => false,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Owner => write!(f, "owner"),
            UserRole::Admin => write!(f, "admin"),
            UserRole::Editor => write!(f, "editor"),
            UserRole::Writer => write!(f, "writer"),
            UserRole::GhostWriter => write!(f, "ghost_writer"),
            UserRole::Team => write!(f, "team"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(UserRole::Owner),
            "admin" => Ok(UserRole::Admin),
            "editor" => Ok(UserRole::Editor),
            "writer" => Ok(UserRole::Writer),
            "ghost_writer" | "ghostwriter" => Ok(UserRole::GhostWriter),
            "team" => Ok(UserRole::Team),
            _ => Err(format!("Unknown user role: {}", s)),
        }
    }
}

/// Identity returned by the hosted auth service for a valid session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: Option<String>,
}

/// Row of the `users` table
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The authenticated user behind the current dashboard request
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}

impl From<UserProfile> for CurrentUser {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            role: profile.role,
            display_name: profile.display_name,
        }
    }
}
