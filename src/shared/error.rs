//! Error handling module
//!
//! This module provides centralized error handling for the application.

use thiserror::Error;
use warp::http::StatusCode;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("RPC request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP {status}{}", reason_suffix(.status_text))]
    Http { status: u16, status_text: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid JSON from RPC")]
    InvalidResponse,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Request body too large: limit is {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::Timeout(_)
            | AppError::Http { .. }
            | AppError::Rpc { .. }
            | AppError::InvalidResponse
            | AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::MissingField(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed { .. } => StatusCode::FORBIDDEN,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure originated at or on the way to the node
    pub fn is_upstream(&self) -> bool {
        self.http_status_code() == StatusCode::BAD_GATEWAY
    }

    /// Short label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Timeout(_) => "timeout",
            AppError::Http { .. } => "http_error",
            AppError::Rpc { .. } => "rpc_error",
            AppError::InvalidResponse => "invalid_response",
            AppError::Transport(_) => "transport",
            AppError::MissingField(_) => "missing_field",
            AppError::Validation(_) => "validation",
            AppError::MethodNotAllowed { .. } => "method_not_allowed",
            AppError::PayloadTooLarge { .. } => "payload_too_large",
            AppError::Internal(_) => "internal",
        }
    }
}

/// Nodes may send a status without a reason phrase
fn reason_suffix(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(" {}", reason)
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<prometheus::Error> for AppError {
    fn from(err: prometheus::Error) -> Self {
        AppError::Internal(format!("metrics: {}", err))
    }
}
