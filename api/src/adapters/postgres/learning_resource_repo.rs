//! PostgreSQL adapter for learning resources

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::{not_updated, to_utc};
use crate::domain::entities::{
    LearningLevel, LearningResource, LearningResourceId, NewLearningResource,
};
use crate::domain::ports::ResourceRepository;
use crate::entity::learning_resources;
use crate::error::DomainError;

pub struct PostgresLearningResourceRepository {
    db: DatabaseConnection,
}

impl PostgresLearningResourceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(resource: &NewLearningResource) -> learning_resources::ActiveModel {
    learning_resources::ActiveModel {
        title: Set(resource.title.clone()),
        description: Set(resource.description.clone()),
        kind: Set(resource.kind.clone()),
        duration: Set(resource.duration.clone()),
        level: Set(resource.level.to_string()),
        instructor: Set(resource.instructor.clone()),
        image_url: Set(resource.image_url.clone()),
        link_url: Set(resource.link_url.clone()),
        tags: Set(resource.tags.clone()),
        ..Default::default()
    }
}

#[async_trait]
impl ResourceRepository<LearningResource> for PostgresLearningResourceRepository {
    async fn list(&self) -> Result<Vec<LearningResource>, DomainError> {
        let results = learning_resources::Entity::find()
            .order_by_asc(learning_resources::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(
        &self,
        id: LearningResourceId,
    ) -> Result<Option<LearningResource>, DomainError> {
        let result = learning_resources::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, resource: &NewLearningResource) -> Result<LearningResource, DomainError> {
        let mut model = active_model(resource);
        model.created_at = Set(Some(Utc::now().fixed_offset()));

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: LearningResourceId,
        resource: &NewLearningResource,
    ) -> Result<LearningResource, DomainError> {
        let mut model = active_model(resource);
        model.id = Set(id.0);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| not_updated(e, "Learning resource", id))?;

        Ok(result.into())
    }

    async fn delete(&self, id: LearningResourceId) -> Result<(), DomainError> {
        let result = learning_resources::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Learning resource {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        learning_resources::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

impl From<learning_resources::Model> for LearningResource {
    fn from(model: learning_resources::Model) -> Self {
        LearningResource {
            id: LearningResourceId(model.id),
            title: model.title,
            description: model.description,
            kind: model.kind,
            duration: model.duration,
            level: model.level.parse().unwrap_or(LearningLevel::Beginner),
            instructor: model.instructor,
            image_url: model.image_url,
            link_url: model.link_url,
            tags: model.tags,
            created_at: to_utc(model.created_at),
        }
    }
}
