//! Health check handler module

use warp::Reply;

use crate::{domain::health::HealthResponse, infrastructure::http::responses::ResponseFormatter};

/// Liveness only; the node is not contacted
pub async fn handle_health_request() -> Result<impl Reply, warp::reject::Rejection> {
    Ok(ResponseFormatter::health(&HealthResponse::ok()))
}
