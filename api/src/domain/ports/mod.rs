//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod auth;
pub mod repositories;
pub mod storage;

pub use auth::AuthProvider;
#[cfg(test)]
pub use auth::MockAuthProvider;
pub use repositories::{BlogPostRepository, ResourceRepository, UserRepository};
pub use storage::{ObjectStorage, StoredObject};
