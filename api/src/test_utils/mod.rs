//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit and HTTP tests.
//! The hosted auth port is mocked with mockall (`MockAuthProvider`); every
//! other port has a hand-written in-memory adapter here, so the whole router
//! can run under axum-test without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
