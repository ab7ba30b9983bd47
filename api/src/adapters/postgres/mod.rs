//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::DbErr;

use crate::error::DomainError;

pub mod blog_post_repo;
pub mod learning_resource_repo;
pub mod portfolio_project_repo;
pub mod product_repo;
pub mod service_package_repo;
pub mod testimonial_repo;
pub mod user_repo;


pub use blog_post_repo::PostgresBlogPostRepository;
pub use learning_resource_repo::PostgresLearningResourceRepository;
pub use portfolio_project_repo::PostgresPortfolioProjectRepository;
pub use product_repo::PostgresProductRepository;
pub use service_package_repo::PostgresServicePackageRepository;
pub use testimonial_repo::PostgresTestimonialRepository;
pub use user_repo::PostgresUserRepository;

/// Map an update error, treating "no row matched" as a missing record
fn not_updated(err: DbErr, what: &str, id: impl std::fmt::Display) -> DomainError {
    match err {
        DbErr::RecordNotUpdated => DomainError::NotFound(format!("{} {} not found", what, id)),
        e => DomainError::Database(e.to_string()),
    }
}

fn to_utc(created_at: Option<DateTime<FixedOffset>>) -> DateTime<Utc> {
    created_at
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}
