//! Converts warp rejections into JSON error bodies

use std::convert::Infallible;
use tracing::debug;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::{infrastructure::http::responses::ResponseFormatter, shared::error::AppError};

/// Recover from rejections so every response carries `{"error": ..}`
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (message, status) = if err.is_not_found() {
        ("Not found".to_string(), StatusCode::NOT_FOUND)
    } else if let Some(app_error) = err.find::<AppError>() {
        (app_error.to_string(), app_error.http_status_code())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ("Method not allowed".to_string(), StatusCode::METHOD_NOT_ALLOWED)
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        ("Request body too large".to_string(), StatusCode::PAYLOAD_TOO_LARGE)
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        ("Content-Length header required".to_string(), StatusCode::LENGTH_REQUIRED)
    } else if let Some(e) = err.find::<warp::reject::InvalidQuery>() {
        (format!("Validation error: {}", e), StatusCode::BAD_REQUEST)
    } else if let Some(e) = err.find::<warp::cors::CorsForbidden>() {
        (e.to_string(), StatusCode::FORBIDDEN)
    } else {
        debug!(rejection = ?err, "Unhandled rejection");
        ("Internal server error".to_string(), StatusCode::INTERNAL_SERVER_ERROR)
    };

    Ok(ResponseFormatter::error_with_status(message, status))
}
