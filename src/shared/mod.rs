//! Shared utilities and common functionality
//!
//! Error handling, logging, metrics and input validation used across the
//! relay and the dashboard.

pub mod error;
pub mod logging;
pub mod metrics;
pub mod validation;

pub use error::{AppError, AppResult};
pub use logging::LoggingUtils;
pub use metrics::RelayMetrics;
pub use validation::ValidationUtils;
