//! Configuration validation module
//!
//! Checks that go beyond the `validator` derive rules.

use warp::http::uri::Authority;

use crate::config::AppConfig;
use crate::shared::error::AppError;
use crate::shared::validation::ValidationUtils;

/// Configuration validator for cross-field rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_cors_origin(&config.security.cors_origin)?;
        Self::validate_relay_url(&config.dashboard.relay_url)?;
        Self::validate_allowed_methods(&config.passthrough.allowed_methods)?;

        if config.cors_allow_any_origin() {
            tracing::debug!("CORS is configured to allow any origin");
        }

        Ok(())
    }

    /// The origin ends up in a response header, so it must be `*` or
    /// `scheme://host[:port]` with nothing after the authority
    fn validate_cors_origin(origin: &str) -> crate::Result<()> {
        if origin == "*" {
            return Ok(());
        }

        let invalid = |reason: &str| {
            AppError::Validation(format!("CORS origin {}: {}", reason, origin))
        };

        let authority = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
            .ok_or_else(|| invalid("must be '*' or start with http:// or https://"))?;

        if authority.is_empty() {
            return Err(invalid("has no host"));
        }

        if authority
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '@') || c.is_whitespace() || c.is_control())
        {
            return Err(invalid("must be scheme://host[:port] only"));
        }

        authority
            .parse::<Authority>()
            .map_err(|_| invalid("has an invalid host"))?;

        Ok(())
    }

    fn validate_relay_url(url: &str) -> crate::Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Validation(
                "Dashboard relay URL must start with http:// or https://".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_allowed_methods(methods: &[String]) -> crate::Result<()> {
        for method in methods {
            ValidationUtils::validate_method_name(method).map_err(|_| {
                AppError::Validation(format!("Invalid passthrough method in allowlist: {:?}", method))
            })?;
        }
        Ok(())
    }
}
