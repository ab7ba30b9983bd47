//! PostgreSQL adapter for products

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::{not_updated, to_utc};
use crate::domain::entities::{NewProduct, Product, ProductId, ProductStatus};
use crate::domain::ports::ResourceRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of the product repository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(product: &NewProduct) -> products::ActiveModel {
    products::ActiveModel {
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        category: Set(product.category.clone()),
        price: Set(product.price.clone()),
        rating: Set(product.rating),
        users: Set(product.users.clone()),
        release_date: Set(product.release_date.clone()),
        features: Set(product.features.clone()),
        gallery: Set(product.gallery.clone()),
        image_url: Set(product.image_url.clone()),
        product_url: Set(product.product_url.clone()),
        status: Set(product.status.to_string()),
        role: Set(product.role.clone()),
        review: Set(product.review.clone()),
        ..Default::default()
    }
}

#[async_trait]
impl ResourceRepository<Product> for PostgresProductRepository {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let mut model = active_model(product);
        model.created_at = Set(Some(Utc::now().fixed_offset()));

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: ProductId, product: &NewProduct) -> Result<Product, DomainError> {
        let mut model = active_model(product);
        model.id = Set(id.0);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| not_updated(e, "Product", id))?;

        Ok(result.into())
    }

    async fn delete(&self, id: ProductId) -> Result<(), DomainError> {
        let result = products::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        products::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.name,
            description: model.description,
            category: model.category,
            price: model.price,
            rating: model.rating,
            users: model.users,
            release_date: model.release_date,
            features: model.features,
            gallery: model.gallery,
            image_url: model.image_url,
            product_url: model.product_url,
            status: model.status.parse().unwrap_or(ProductStatus::Available),
            role: model.role,
            review: model.review,
            created_at: to_utc(model.created_at),
        }
    }
}
