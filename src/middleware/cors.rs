//! CORS configuration for the relay API
//!
//! The dashboard is served from a different origin than the relay, so the
//! relay answers preflights itself.

use tracing::info;

use crate::config::AppConfig;

const ALLOWED_METHODS: [&str; 3] = ["GET", "POST", "OPTIONS"];
const ALLOWED_HEADERS: [&str; 1] = ["content-type"];
const MAX_AGE_SECONDS: u32 = 3600;

/// CORS middleware built from the configured origin
#[derive(Debug, Clone)]
pub struct CorsMiddleware {
    origin: String,
}

impl CorsMiddleware {
    /// Create a new CORS middleware
    pub fn new(config: &AppConfig) -> Self {
        Self {
            origin: config.security.cors_origin.clone(),
        }
    }

    /// Check if CORS allows any origin
    pub fn allows_any_origin(&self) -> bool {
        self.origin == "*"
    }

    /// Build the warp CORS wrapper; the origin must have passed config validation
    pub fn filter(&self) -> warp::cors::Cors {
        let builder = warp::cors()
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(ALLOWED_HEADERS)
            .max_age(MAX_AGE_SECONDS);

        if self.allows_any_origin() {
            builder.allow_any_origin().build()
        } else {
            info!(origin = %self.origin, "CORS restricted to a single origin");
            builder.allow_origin(self.origin.as_str()).build()
        }
    }
}
