//! Cross-module test suite
//!
//! - `common`: mock HTTP server, in-memory node and fixtures
//! - `integration`: end-to-end relay scenarios over the real adapter

pub mod common;
pub mod integration;

/// Test result type
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
