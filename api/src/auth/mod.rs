//! Authentication for dashboard routes

pub mod session;

pub use session::session_middleware;
