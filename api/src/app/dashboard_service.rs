//! Dashboard service
//!
//! Overview counts for the dashboard landing page.

use std::sync::Arc;

use serde::Serialize;

use crate::app::blog_service::BlogService;
use crate::app::content_service::ContentService;
use crate::domain::entities::{
    LearningResource, PortfolioProject, Product, ServicePackage, Testimonial,
};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub products: u64,
    pub blog_posts: u64,
    pub pending_review: u64,
    pub learning_resources: u64,
    pub portfolio_projects: u64,
    pub testimonials: u64,
    pub service_packages: u64,
}

pub struct DashboardService {
    products: Arc<ContentService<Product>>,
    blog: Arc<BlogService>,
    learning: Arc<ContentService<LearningResource>>,
    portfolio: Arc<ContentService<PortfolioProject>>,
    testimonials: Arc<ContentService<Testimonial>>,
    services: Arc<ContentService<ServicePackage>>,
}

impl DashboardService {
    pub fn new(
        products: Arc<ContentService<Product>>,
        blog: Arc<BlogService>,
        learning: Arc<ContentService<LearningResource>>,
        portfolio: Arc<ContentService<PortfolioProject>>,
        testimonials: Arc<ContentService<Testimonial>>,
        services: Arc<ContentService<ServicePackage>>,
    ) -> Self {
        Self {
            products,
            blog,
            learning,
            portfolio,
            testimonials,
            services,
        }
    }

    /// Counts of every table, fetched concurrently. Counts bypass the cache.
    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let (
            products,
            blog_posts,
            pending_review,
            learning_resources,
            portfolio_projects,
            testimonials,
            service_packages,
        ) = tokio::try_join!(
            self.products.count(),
            self.blog.count(),
            self.blog.count_pending(),
            self.learning.count(),
            self.portfolio.count(),
            self.testimonials.count(),
            self.services.count(),
        )?;

        Ok(DashboardStats {
            products,
            blog_posts,
            pending_review,
            learning_resources,
            portfolio_projects,
            testimonials,
            service_packages,
        })
    }
}
