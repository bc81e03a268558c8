//! Application configuration structures
//!
//! This module contains the configuration consumed by the relay and the
//! dashboard. It is built once at startup and passed down explicitly.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;
use validator::Validate;

use crate::shared::error::AppError;

/// Node daemon connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NodeConfig {
    /// Node host name or IP
    #[validate(length(min = 1))]
    pub host: String,

    /// Node JSON-RPC port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// RPC username
    #[validate(length(min = 1))]
    pub rpc_user: String,

    /// RPC password
    #[validate(length(min = 1))]
    pub rpc_password: String,

    /// Deadline for a single RPC exchange in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,

    /// Value sent as the JSON-RPC `id`
    #[validate(length(min = 1, max = 64))]
    pub client_id: String,
}

impl NodeConfig {
    /// Endpoint the relay posts JSON-RPC envelopes to
    pub fn rpc_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Relay HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_address: IpAddr,

    /// Listen port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Maximum request body size in bytes
    #[validate(range(min = 1024, max = 10485760))] // 1KB to 10MB
    pub max_request_size: usize,
}

/// Cross-origin and request logging settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SecurityConfig {
    /// Allowed CORS origin, `*` for any
    #[validate(length(min = 1))]
    pub cors_origin: String,

    /// Log every relayed request at info
    pub enable_request_logging: bool,
}

/// Gate for the generic `/api/rpc` route
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PassthroughConfig {
    /// Serve the passthrough route at all
    pub enabled: bool,

    /// Methods callers may invoke; empty allows any method
    #[serde(default)]
    pub allowed_methods: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[validate(length(min = 1))]
    pub level: String,
}

/// Dashboard polling configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Base URL of the relay
    #[validate(url)]
    pub relay_url: String,

    /// Seconds between polls
    #[validate(range(min = 1, max = 3600))]
    pub poll_interval_seconds: u64,

    /// `minConf` passed to the address balances route
    pub min_conf: u32,
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub node: NodeConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub passthrough: PassthroughConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node: NodeConfig {
                host: "bitcoind".to_string(),
                port: 8332,
                rpc_user: "rpcuser".to_string(),
                rpc_password: "rpcpassword".to_string(),
                timeout_seconds: 10,
                client_id: "web".to_string(),
            },
            server: ServerConfig {
                bind_address: IpAddr::from([0, 0, 0, 0]),
                port: 4000,
                max_request_size: 1024 * 1024, // 1MB
            },
            security: SecurityConfig {
                cors_origin: "*".to_string(),
                enable_request_logging: true,
            },
            passthrough: PassthroughConfig {
                enabled: true,
                allowed_methods: Vec::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            dashboard: DashboardConfig {
                relay_url: "http://127.0.0.1:4000".to_string(),
                poll_interval_seconds: 10,
                min_conf: 0,
            },
        }
    }
}

/// Flat variable names used by existing deployments
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("RPC_HOST", "node.host"),
    ("RPC_PORT", "node.port"),
    ("RPC_USER", "node.rpc_user"),
    ("RPC_PASSWORD", "node.rpc_password"),
    ("WEB_PORT", "server.port"),
    ("CORS_ORIGIN", "security.cors_origin"),
    ("RELAY_URL", "dashboard.relay_url"),
];

impl AppConfig {
    /// Load configuration from defaults, an optional `Relay` file and the environment
    pub fn load() -> crate::Result<Self> {
        let defaults = config::Config::try_from(&AppConfig::default())
            .map_err(|e| AppError::Config(format!("Failed to serialize defaults: {}", e)))?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("Relay").required(false))
            .add_source(
                config::Environment::with_prefix("RELAY")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("passthrough.allowed_methods"),
            );

        for (var, key) in LEGACY_ENV_KEYS {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let config: AppConfig = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> crate::Result<()> {
        self.validate_sections()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        super::ConfigValidator::validate_config(self)
    }

    fn validate_sections(&self) -> Result<(), validator::ValidationErrors> {
        self.node.validate()?;
        self.server.validate()?;
        self.security.validate()?;
        self.passthrough.validate()?;
        self.logging.validate()?;
        self.dashboard.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Check if CORS is configured for any origin
    pub fn cors_allow_any_origin(&self) -> bool {
        self.security.cors_origin == "*"
    }
}
