//! RPC domain logic - request, envelope and reply rules

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::{AppError, AppResult};

/// Node methods behind the fixed read routes
pub mod methods {
    pub const TOTAL_BALANCES: &str = "gettotalbalances";
    pub const TOP_BALANCES: &str = "gettopbalances";
    pub const LATEST_UTXO: &str = "getlatestutxo";
    pub const ADDRESS_BALANCES: &str = "getaddressbalances";
}

/// JSON-RPC version string the node expects
pub const JSONRPC_VERSION: &str = "1.0";

/// A single call to be made against the node
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    /// Method name
    pub method: String,

    /// Positional parameters
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// A call that takes no parameters
    pub fn without_params(method: impl Into<String>) -> Self {
        Self::new(method, Vec::new())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.method.is_empty() {
            return Err(AppError::MissingField("method".to_string()));
        }
        Ok(())
    }
}

/// Wire envelope posted to the node
#[derive(Debug, Serialize)]
pub struct RpcEnvelope<'a> {
    pub jsonrpc: &'static str,
    pub id: &'a str,
    pub method: &'a str,
    pub params: &'a [Value],
}

impl<'a> RpcEnvelope<'a> {
    pub fn new(client_id: &'a str, request: &'a RpcRequest) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: client_id,
            method: &request.method,
            params: &request.params,
        }
    }
}

/// JSON-RPC error object as returned by the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    /// Read an error object leniently; nodes are not always strict about its shape
    fn from_value(value: &Value) -> Self {
        let code = value.get("code").and_then(Value::as_i64).unwrap_or(-32603);
        let message = match value.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => value.to_string(),
        };
        Self { code, message }
    }
}

impl From<RpcError> for AppError {
    fn from(err: RpcError) -> Self {
        AppError::Rpc {
            code: err.code,
            message: err.message,
        }
    }
}

/// Interpreter for a parsed node reply body
pub struct RpcReply;

impl RpcReply {
    /// Split a reply into its `result` or its `error`; a non-null error wins
    pub fn interpret(body: Value) -> AppResult<Value> {
        match body {
            Value::Object(mut fields) => {
                match fields.remove("error") {
                    Some(Value::Null) | None => {}
                    Some(error) => return Err(RpcError::from_value(&error).into()),
                }
                Ok(fields.remove("result").unwrap_or(Value::Null))
            }
            _ => Err(AppError::InvalidResponse),
        }
    }
}
