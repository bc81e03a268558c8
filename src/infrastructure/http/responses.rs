//! HTTP responses module
//!
//! Turns relay outcomes into warp replies.

use serde_json::Value;
use warp::http::StatusCode;
use warp::reply::{Json, Response, WithStatus};
use warp::Reply;

use crate::{
    domain::health::HealthResponse,
    infrastructure::http::models::{ErrorBody, ResultEnvelope},
    shared::error::{AppError, AppResult},
};

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// `200 {"result": value}` or the mapped error
    pub fn enveloped(outcome: AppResult<Value>) -> Response {
        match outcome {
            Ok(result) => warp::reply::json(&ResultEnvelope { result }).into_response(),
            Err(e) => Self::from_app_error(&e).into_response(),
        }
    }

    /// `200 value` or the mapped error
    pub fn raw(outcome: AppResult<Value>) -> Response {
        match outcome {
            Ok(value) => warp::reply::json(&value).into_response(),
            Err(e) => Self::from_app_error(&e).into_response(),
        }
    }

    /// Format an error message with status code
    pub fn error_with_status(message: impl Into<String>, status: StatusCode) -> WithStatus<Json> {
        let body = ErrorBody { error: message.into() };
        warp::reply::with_status(warp::reply::json(&body), status)
    }

    /// Format an application error
    pub fn from_app_error(error: &AppError) -> WithStatus<Json> {
        warp::reply::with_status(
            warp::reply::json(&ErrorBody::from(error)),
            error.http_status_code(),
        )
    }

    /// Format a health check response
    pub fn health(health: &HealthResponse) -> Json {
        warp::reply::json(health)
    }
}
