//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the query cache.

pub mod blog_service;
pub mod content_service;
pub mod dashboard_service;
pub mod forms;
pub mod post_content;
pub mod query_cache;
pub mod session_service;
pub mod upload_service;

pub use blog_service::BlogService;
pub use content_service::ContentService;
pub use dashboard_service::{DashboardService, DashboardStats};
pub use query_cache::QueryCache;
pub use session_service::SessionService;
pub use upload_service::UploadService;
