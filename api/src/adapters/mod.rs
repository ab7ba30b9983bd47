//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod s3;
pub mod supabase;

pub use postgres::{
    PostgresBlogPostRepository, PostgresLearningResourceRepository,
    PostgresPortfolioProjectRepository, PostgresProductRepository,
    PostgresServicePackageRepository, PostgresTestimonialRepository, PostgresUserRepository,
};
pub use s3::S3Storage;
pub use supabase::{SupabaseAuthClient, SupabaseStorage};
