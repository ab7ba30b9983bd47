//! WednesDev API Server
//!
//! Content API behind the WednesDev marketing site and its dashboard.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresBlogPostRepository, PostgresLearningResourceRepository,
    PostgresPortfolioProjectRepository, PostgresProductRepository,
    PostgresServicePackageRepository, PostgresTestimonialRepository, PostgresUserRepository,
    S3Storage, SupabaseAuthClient, SupabaseStorage,
};
use app::{BlogService, ContentService, DashboardService, QueryCache, SessionService, UploadService};
use config::{Config, StorageProvider};
use domain::entities::{
    LearningResource, PortfolioProject, Product, ServicePackage, Testimonial,
};
use domain::ports::ObjectStorage;
use handlers::{blog, catalog, dashboard, site, uploads};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ContentService<Product>>,
    pub learning: Arc<ContentService<LearningResource>>,
    pub portfolio: Arc<ContentService<PortfolioProject>>,
    pub testimonials: Arc<ContentService<Testimonial>>,
    pub services: Arc<ContentService<ServicePackage>>,
    pub blog: Arc<BlogService>,
    pub dashboard: Arc<DashboardService>,
    pub sessions: Arc<SessionService>,
    pub uploads: Arc<UploadService>,
    pub site: Arc<site::SiteSettings>,
    pub max_upload_bytes: usize,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Public site routes plus the session-protected dashboard
pub fn build_router(state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/me", get(dashboard::me))
        .route("/stats", get(dashboard::stats))
        .nest("/blog", blog::dashboard_routes())
        .nest("/products", catalog::dashboard_routes::<Product>())
        .nest("/learn", catalog::dashboard_routes::<LearningResource>())
        .nest("/portfolio", catalog::dashboard_routes::<PortfolioProject>())
        .nest("/testimonials", catalog::dashboard_routes::<Testimonial>())
        .nest("/services", catalog::dashboard_routes::<ServicePackage>())
        .route(
            "/uploads",
            put(uploads::upload)
                .delete(uploads::delete)
                .layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::session_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/site", get(site::settings))
        // Public site
        .route("/blog", get(blog::list_published))
        .route("/blog/:slug", get(blog::get_by_slug))
        .route("/products", get(catalog::list::<Product>))
        .route("/products/:id", get(catalog::get_one::<Product>))
        .route("/learn", get(catalog::list_learning))
        .route("/learn/:id", get(catalog::get_one::<LearningResource>))
        .route("/portfolio", get(catalog::list::<PortfolioProject>))
        .route("/portfolio/:id", get(catalog::get_one::<PortfolioProject>))
        .route("/testimonials", get(catalog::list::<Testimonial>))
        .route("/services", get(catalog::list::<ServicePackage>))
        .nest("/dashboard", dashboard_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wednesdev_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WednesDev API...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let storage: Arc<dyn ObjectStorage> = match config.storage_provider {
        StorageProvider::S3 => {
            let s3 = config
                .s3
                .as_ref()
                .context("S3 storage selected without S3 settings")?;
            Arc::new(S3Storage::new(s3)?)
        }
        StorageProvider::Supabase => Arc::new(SupabaseStorage::new(
            config.supabase_url.clone(),
            config.storage_bucket.clone(),
            config.storage_key().to_string(),
        )),
    };
    tracing::info!(provider = %config.storage_provider, "Object storage configured");

    if config.analytics_measurement_id.is_none() {
        tracing::warn!("GA_MEASUREMENT_ID not set, site analytics disabled");
    }

    let auth = Arc::new(SupabaseAuthClient::new(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
    ));

    let cache = Arc::new(QueryCache::new());

    let products = Arc::new(ContentService::<Product>::new(
        Arc::new(PostgresProductRepository::new(db.clone())),
        cache.clone(),
    ));
    let learning = Arc::new(ContentService::<LearningResource>::new(
        Arc::new(PostgresLearningResourceRepository::new(db.clone())),
        cache.clone(),
    ));
    let portfolio = Arc::new(ContentService::<PortfolioProject>::new(
        Arc::new(PostgresPortfolioProjectRepository::new(db.clone())),
        cache.clone(),
    ));
    let testimonials = Arc::new(ContentService::<Testimonial>::new(
        Arc::new(PostgresTestimonialRepository::new(db.clone())),
        cache.clone(),
    ));
    let services = Arc::new(ContentService::<ServicePackage>::new(
        Arc::new(PostgresServicePackageRepository::new(db.clone())),
        cache.clone(),
    ));
    let blog = Arc::new(BlogService::new(
        Arc::new(PostgresBlogPostRepository::new(db.clone())),
        cache.clone(),
        config.default_author_name.clone(),
    ));

    let dashboard = Arc::new(DashboardService::new(
        products.clone(),
        blog.clone(),
        learning.clone(),
        portfolio.clone(),
        testimonials.clone(),
        services.clone(),
    ));
    let sessions = Arc::new(SessionService::new(
        auth,
        Arc::new(PostgresUserRepository::new(db.clone())),
    ));
    let uploads = Arc::new(UploadService::new(storage, config.max_upload_bytes));

    let state = AppState {
        products,
        learning,
        portfolio,
        testimonials,
        services,
        blog,
        dashboard,
        sessions,
        uploads,
        site: Arc::new(site::SiteSettings {
            analytics_measurement_id: config.analytics_measurement_id.clone(),
            storage_provider: config.storage_provider,
        }),
        max_upload_bytes: config.max_upload_bytes,
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
