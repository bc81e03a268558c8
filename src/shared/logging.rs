//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{info, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging; `RUST_LOG` takes precedence over `level`
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| crate::shared::error::AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log a successfully relayed call
    pub fn log_success(request_id: &str, route: &str, method: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            route = %route,
            method = %method,
            duration_ms = %duration_ms,
            "Relayed RPC call"
        );
    }

    /// Log a failed relay
    pub fn log_error(
        request_id: &str,
        route: &str,
        method: &str,
        error: &crate::shared::error::AppError,
        duration_ms: u64,
    ) {
        warn!(
            request_id = %request_id,
            route = %route,
            method = %method,
            kind = error.kind(),
            error = %error,
            duration_ms = %duration_ms,
            "Relay failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", uuid::Uuid::new_v4().simple())
    }
}
