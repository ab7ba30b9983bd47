//! PostgreSQL adapter for testimonials

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::{not_updated, to_utc};
use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId};
use crate::domain::ports::ResourceRepository;
use crate::entity::testimonials;
use crate::error::DomainError;

pub struct PostgresTestimonialRepository {
    db: DatabaseConnection,
}

impl PostgresTestimonialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(testimonial: &NewTestimonial) -> testimonials::ActiveModel {
    testimonials::ActiveModel {
        name: Set(testimonial.name.clone()),
        role: Set(testimonial.role.clone()),
        company: Set(testimonial.company.clone()),
        testimonial: Set(testimonial.testimonial.clone()),
        rating: Set(testimonial.rating),
        avatar: Set(testimonial.avatar.clone()),
        ..Default::default()
    }
}

#[async_trait]
impl ResourceRepository<Testimonial> for PostgresTestimonialRepository {
    /// Newest first
    async fn list(&self) -> Result<Vec<Testimonial>, DomainError> {
        let results = testimonials::Entity::find()
            .order_by_desc(testimonials::Column::CreatedAt)
            .order_by_desc(testimonials::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: TestimonialId) -> Result<Option<Testimonial>, DomainError> {
        let result = testimonials::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, testimonial: &NewTestimonial) -> Result<Testimonial, DomainError> {
        let mut model = active_model(testimonial);
        model.created_at = Set(Some(Utc::now().fixed_offset()));

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: TestimonialId,
        testimonial: &NewTestimonial,
    ) -> Result<Testimonial, DomainError> {
        let mut model = active_model(testimonial);
        model.id = Set(id.0);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| not_updated(e, "Testimonial", id))?;

        Ok(result.into())
    }

    async fn delete(&self, id: TestimonialId) -> Result<(), DomainError> {
        let result = testimonials::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Testimonial {} not found", id)));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        testimonials::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

impl From<testimonials::Model> for Testimonial {
    fn from(model: testimonials::Model) -> Self {
        Testimonial {
            id: TestimonialId(model.id),
            name: model.name,
            role: model.role,
            company: model.company,
            testimonial: model.testimonial,
            rating: model.rating,
            avatar: model.avatar,
            created_at: to_utc(model.created_at),
        }
    }
}
