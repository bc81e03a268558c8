//! HTTP models - request and response bodies of the relay API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::rpc::RpcRequest,
    shared::{
        error::{AppError, AppResult},
        validation::ValidationUtils,
    },
};

/// Success envelope used by the `/api/*` routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result: Value,
}

/// Body of every failed response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Parser for the `/api/rpc` request body
pub struct PassthroughBody;

impl PassthroughBody {
    /// Turn `{method, params?}` into an [`RpcRequest`]
    pub fn parse(bytes: &[u8]) -> AppResult<RpcRequest> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::MissingField("method".to_string()));
        }

        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| AppError::Validation(format!("Request body must be valid JSON: {}", e)))?;

        // Non-object bodies have no `method` either
        let method = match body.get("method") {
            None | Some(Value::Null) => return Err(AppError::MissingField("method".to_string())),
            Some(Value::String(method)) if method.is_empty() => {
                return Err(AppError::MissingField("method".to_string()))
            }
            Some(Value::String(method)) => method.clone(),
            Some(_) => {
                return Err(AppError::Validation("Field 'method' must be a string".to_string()))
            }
        };

        let params = ValidationUtils::validate_parameters(body.get("params"))?;

        Ok(RpcRequest::new(method, params))
    }
}
