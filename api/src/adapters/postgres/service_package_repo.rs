//! PostgreSQL adapter for service packages

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::{not_updated, to_utc};
use crate::domain::entities::{NewServicePackage, ServicePackage, ServicePackageId};
use crate::domain::ports::ResourceRepository;
use crate::entity::service_packages;
use crate::error::DomainError;

pub struct PostgresServicePackageRepository {
    db: DatabaseConnection,
}

impl PostgresServicePackageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(package: &NewServicePackage) -> service_packages::ActiveModel {
    service_packages::ActiveModel {
        name: Set(package.name.clone()),
        price_label: Set(package.price_label.clone()),
        target: Set(package.target.clone()),
        features: Set(package.features.clone()),
        duration: Set(package.duration.clone()),
        optional_note: Set(package.optional_note.clone()),
        popular: Set(package.popular),
        sort_order: Set(package.sort_order),
        ..Default::default()
    }
}

#[async_trait]
impl ResourceRepository<ServicePackage> for PostgresServicePackageRepository {
    /// Display order (`sort_order` ascending)
    async fn list(&self) -> Result<Vec<ServicePackage>, DomainError> {
        let results = service_packages::Entity::find()
            .order_by_asc(service_packages::Column::SortOrder)
            .order_by_asc(service_packages::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: ServicePackageId) -> Result<Option<ServicePackage>, DomainError> {
        let result = service_packages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, package: &NewServicePackage) -> Result<ServicePackage, DomainError> {
        let mut model = active_model(package);
        model.created_at = Set(Some(Utc::now().fixed_offset()));

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: ServicePackageId,
        package: &NewServicePackage,
    ) -> Result<ServicePackage, DomainError> {
        let mut model = active_model(package);
        model.id = Set(id.0);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| not_updated(e, "Service package", id))?;

        Ok(result.into())
    }

    async fn delete(&self, id: ServicePackageId) -> Result<(), DomainError> {
        let result = service_packages::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Service package {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        service_packages::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

impl From<service_packages::Model> for ServicePackage {
    fn from(model: service_packages::Model) -> Self {
        ServicePackage {
            id: ServicePackageId(model.id),
            name: model.name,
            price_label: model.price_label,
            target: model.target,
            features: model.features,
            duration: model.duration,
            optional_note: model.optional_note,
            popular: model.popular,
            sort_order: model.sort_order,
            created_at: to_utc(model.created_at),
        }
    }
}
