//! Service package domain entity
//!
//! Priced service bundles shown on the pricing section, ordered by `sort_order`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

record_id!(
    /// Unique identifier for a service package
    ServicePackageId
);

#[derive(Debug, Clone, Serialize)]
pub struct ServicePackage {
    pub id: ServicePackageId,
    pub name: String,
    pub price_label: String,
    pub target: Option<String>,
    pub features: Vec<String>,
    pub duration: String,
    pub optional_note: Option<String>,
    /// Highlighted as the recommended package
    pub popular: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Resource for ServicePackage {
    const KEY: &'static str = "service_packages";
    type Id = ServicePackageId;
    type Input = NewServicePackage;

    fn id(&self) -> ServicePackageId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewServicePackage {
    pub name: String,
    pub price_label: String,
    pub target: Option<String>,
    pub features: Vec<String>,
    pub duration: String,
    pub optional_note: Option<String>,
    pub popular: bool,
    pub sort_order: i32,
}
