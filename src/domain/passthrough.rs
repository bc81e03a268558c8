//! Gate for arbitrary node calls made through `/api/rpc`

use std::collections::HashSet;

use crate::config::PassthroughConfig;
use crate::shared::error::{AppError, AppResult};

/// Decides which caller-named methods may reach the node
#[derive(Debug, Clone)]
pub struct PassthroughPolicy {
    enabled: bool,
    allowed: HashSet<String>,
}

impl PassthroughPolicy {
    pub fn from_config(config: &PassthroughConfig) -> Self {
        Self {
            enabled: config.enabled,
            allowed: config.allowed_methods.iter().cloned().collect(),
        }
    }

    /// Policy that lets every method through
    pub fn open() -> Self {
        Self {
            enabled: true,
            allowed: HashSet::new(),
        }
    }

    pub fn is_restricted(&self) -> bool {
        !self.enabled || !self.allowed.is_empty()
    }

    pub fn check(&self, method: &str) -> AppResult<()> {
        if !self.enabled || (!self.allowed.is_empty() && !self.allowed.contains(method)) {
            return Err(AppError::MethodNotAllowed {
                method: method.to_string(),
            });
        }
        Ok(())
    }
}
