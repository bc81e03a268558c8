//! Configuration management module
//!
//! This module handles loading and validating the relay and dashboard
//! settings.

pub mod app_config;
pub mod validation;

pub use app_config::{
    AppConfig, DashboardConfig, LoggingConfig, NodeConfig, PassthroughConfig, SecurityConfig,
    ServerConfig,
};
pub use validation::ConfigValidator;
