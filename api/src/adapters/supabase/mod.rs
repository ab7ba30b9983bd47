//! Supabase adapters: hosted auth and storage

pub mod auth_client;
pub mod storage_client;

pub use auth_client::SupabaseAuthClient;
pub use storage_client::SupabaseStorage;
