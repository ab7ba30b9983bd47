//! Domain entities
//!
//! Pure domain models representing the site's content.
//! These are separate from the SeaORM entities in the `entity` module.

/// Integer-backed identifier newtype for a stored record
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod blog_post;
pub mod learning_resource;
pub mod portfolio_project;
pub mod product;
pub mod service_package;
pub mod testimonial;
pub mod user;

pub use blog_post::{
    BlogPost, BlogPostId, NewBlogPost, PostStatus, ReviewDecision, ReviewRecord,
};
pub use learning_resource::{
    LearningLevel, LearningResource, LearningResourceId, NewLearningResource,
};
pub use portfolio_project::{NewPortfolioProject, PortfolioProject, PortfolioProjectId};
pub use product::{NewProduct, Product, ProductId, ProductStatus};
pub use service_package::{NewServicePackage, ServicePackage, ServicePackageId};
pub use testimonial::{NewTestimonial, Testimonial, TestimonialId};
pub use user::{AuthUser, CurrentUser, UserId, UserProfile, UserRole};

/// A record type managed through the dashboard
pub trait Resource: Clone + Send + Sync + 'static {
    /// Table name, also used as the query cache key
    const KEY: &'static str;

    type Id: Copy
        + Eq
        + std::hash::Hash
        + std::fmt::Display
        + From<i64>
        + Into<i64>
        + Send
        + Sync
        + 'static;

    /// Payload written on create and update
    type Input: Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}
