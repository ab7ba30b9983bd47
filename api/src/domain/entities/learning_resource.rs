//! Learning resource domain entity
//!
//! Courses, videos and articles listed in the learning hub.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

record_id!(
    /// Unique identifier for a learning resource
    LearningResourceId
);

/// Difficulty level, stored capitalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for LearningLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearningLevel::Beginner => write!(f, "Beginner"),
            LearningLevel::Intermediate => write!(f, "Intermediate"),
            LearningLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for LearningLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(LearningLevel::Beginner),
            "intermediate" => Ok(LearningLevel::Intermediate),
            "advanced" => Ok(LearningLevel::Advanced),
            _ => Err(format!("Unknown learning level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningResource {
    pub id: LearningResourceId,
    pub title: String,
    pub description: String,
    /// Video, Article, Course, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
    pub level: LearningLevel,
    pub instructor: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl LearningResource {
    /// Type match used by the learning hub filter
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

impl Resource for LearningResource {
    const KEY: &'static str = "learning_resources";
    type Id = LearningResourceId;
    type Input = NewLearningResource;

    fn id(&self) -> LearningResourceId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewLearningResource {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub duration: String,
    pub level: LearningLevel,
    pub instructor: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub tags: Vec<String>,
}
