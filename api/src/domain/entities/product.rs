//! Product domain entity
//!
//! Software products showcased on the products page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

record_id!(
    /// Unique identifier for a product
    ProductId
);

/// Product availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Available,
    ComingSoon,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Available => write!(f, "available"),
            ProductStatus::ComingSoon => write!(f, "coming_soon"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(ProductStatus::Available),
            "coming_soon" => Ok(ProductStatus::ComingSoon),
            _ => Err(format!("Unknown product status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Free-form price label ("Rp 1.500.000", "Free", ...)
    pub price: String,
    pub rating: f64,
    /// User count label
    pub users: String,
    pub release_date: String,
    pub features: Vec<String>,
    pub gallery: Vec<String>,
    pub image_url: String,
    pub product_url: Option<String>,
    pub status: ProductStatus,
    pub role: String,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Resource for Product {
    const KEY: &'static str = "products";
    type Id = ProductId;
    type Input = NewProduct;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub rating: f64,
    pub users: String,
    pub release_date: String,
    pub features: Vec<String>,
    pub gallery: Vec<String>,
    pub image_url: String,
    pub product_url: Option<String>,
    pub status: ProductStatus,
    pub role: String,
    pub review: Option<String>,
}
