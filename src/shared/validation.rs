//! Validation utilities module
//!
//! Input checks shared by the HTTP layer and configuration.

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::shared::error::AppError;

static METHOD_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.]{1,100}$").expect("method name pattern is valid")
});

/// Upper bound on positional parameters forwarded to the node
const MAX_PARAMS: usize = 100;

/// Validation utilities for the application
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate a JSON-RPC method name
    pub fn validate_method_name(method: &str) -> crate::Result<()> {
        if method.is_empty() {
            return Err(AppError::MissingField("method".to_string()));
        }

        if !METHOD_NAME.is_match(method) {
            return Err(AppError::Validation(format!(
                "Method name must be 1-100 characters of [A-Za-z0-9_.]: {:?}",
                method
            )));
        }

        Ok(())
    }

    /// Normalize passthrough parameters into a positional list
    pub fn validate_parameters(params: Option<&Value>) -> crate::Result<Vec<Value>> {
        match params {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => {
                if items.len() > MAX_PARAMS {
                    return Err(AppError::Validation(format!(
                        "Too many parameters (max {})",
                        MAX_PARAMS
                    )));
                }
                Ok(items.clone())
            }
            Some(_) => Err(AppError::Validation("Field 'params' must be an array".to_string())),
        }
    }

    /// Read the optional `minConf` query parameter
    pub fn parse_min_conf(query: &HashMap<String, String>) -> crate::Result<u32> {
        match query.get("minConf") {
            None => Ok(0),
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::Validation(format!("minConf must be a non-negative integer, got {:?}", raw))
            }),
        }
    }
}
