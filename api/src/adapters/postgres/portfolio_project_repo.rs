//! PostgreSQL adapter for portfolio projects

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::{not_updated, to_utc};
use crate::domain::entities::{NewPortfolioProject, PortfolioProject, PortfolioProjectId};
use crate::domain::ports::ResourceRepository;
use crate::entity::portfolio_projects;
use crate::error::DomainError;

pub struct PostgresPortfolioProjectRepository {
    db: DatabaseConnection,
}

impl PostgresPortfolioProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(project: &NewPortfolioProject) -> portfolio_projects::ActiveModel {
    portfolio_projects::ActiveModel {
        title: Set(project.title.clone()),
        description: Set(project.description.clone()),
        category: Set(project.category.clone()),
        image_url: Set(project.image_url.clone()),
        gallery: Set(project.gallery.clone()),
        results: Set(project.results.clone()),
        tech: Set(project.tech.clone()),
        rating: Set(project.rating),
        publish_date: Set(project.publish_date.clone()),
        link: Set(project.link.clone()),
        review: Set(project.review.clone()),
        ..Default::default()
    }
}

#[async_trait]
impl ResourceRepository<PortfolioProject> for PostgresPortfolioProjectRepository {
    async fn list(&self) -> Result<Vec<PortfolioProject>, DomainError> {
        let results = portfolio_projects::Entity::find()
            .order_by_asc(portfolio_projects::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(
        &self,
        id: PortfolioProjectId,
    ) -> Result<Option<PortfolioProject>, DomainError> {
        let result = portfolio_projects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, project: &NewPortfolioProject) -> Result<PortfolioProject, DomainError> {
        let mut model = active_model(project);
        model.created_at = Set(Some(Utc::now().fixed_offset()));

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: PortfolioProjectId,
        project: &NewPortfolioProject,
    ) -> Result<PortfolioProject, DomainError> {
        let mut model = active_model(project);
        model.id = Set(id.0);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| not_updated(e, "Portfolio project", id))?;

        Ok(result.into())
    }

    async fn delete(&self, id: PortfolioProjectId) -> Result<(), DomainError> {
        let result = portfolio_projects::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Portfolio project {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        portfolio_projects::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

impl From<portfolio_projects::Model> for PortfolioProject {
    fn from(model: portfolio_projects::Model) -> Self {
        PortfolioProject {
            id: PortfolioProjectId(model.id),
            title: model.title,
            description: model.description,
            category: model.category,
            image_url: model.image_url,
            gallery: model.gallery,
            results: model.results,
            tech: model.tech,
            rating: model.rating,
            publish_date: model.publish_date,
            link: model.link,
            review: model.review,
            created_at: to_utc(model.created_at),
        }
    }
}
