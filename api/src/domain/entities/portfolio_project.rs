//! Portfolio project domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

record_id!(
    /// Unique identifier for a portfolio project
    PortfolioProjectId
);

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioProject {
    pub id: PortfolioProjectId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub gallery: Vec<String>,
    /// Outcome bullet points
    pub results: Vec<String>,
    pub tech: Vec<String>,
    pub rating: f64,
    pub publish_date: String,
    pub link: String,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Resource for PortfolioProject {
    const KEY: &'static str = "portfolio_projects";
    type Id = PortfolioProjectId;
    type Input = NewPortfolioProject;

    fn id(&self) -> PortfolioProjectId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewPortfolioProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub gallery: Vec<String>,
    pub results: Vec<String>,
    pub tech: Vec<String>,
    pub rating: f64,
    pub publish_date: String,
    pub link: String,
    pub review: Option<String>,
}
