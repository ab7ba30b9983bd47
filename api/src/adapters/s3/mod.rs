//! S3-compatible storage adapter

pub mod client;

pub use client::S3Storage;
