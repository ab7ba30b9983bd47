//! SeaORM entities
//!
//! Table models for the Postgres schema. Domain types live in
//! `domain::entities`; the adapters convert between the two.

pub mod blog_posts;
pub mod learning_resources;
pub mod portfolio_projects;
pub mod products;
pub mod service_packages;
pub mod testimonials;
pub mod users;
