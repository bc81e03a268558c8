//! Prometheus metrics handler

use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::{infrastructure::http::responses::ResponseFormatter, shared::metrics::RelayMetrics};

/// Handle Prometheus metrics requests
pub async fn handle_metrics_request(
    metrics: Arc<RelayMetrics>,
) -> Result<Response, warp::reject::Rejection> {
    let response = match metrics.render() {
        Ok(text) => warp::reply::with_header(
            warp::reply::with_status(text, StatusCode::OK),
            "Content-Type",
            "text/plain; version=0.0.4; charset=utf-8",
        )
        .into_response(),
        Err(e) => ResponseFormatter::from_app_error(&e).into_response(),
    };
    Ok(response)
}
