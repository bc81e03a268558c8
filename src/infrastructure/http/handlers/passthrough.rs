//! Generic `/api/rpc` passthrough handler

use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;
use warp::reply::Response;

use crate::{
    application::services::RelayService,
    infrastructure::http::{models::PassthroughBody, responses::ResponseFormatter},
};

/// Handle `POST /api/rpc {method, params?}`
pub async fn handle_rpc_passthrough(
    body: Bytes,
    relay_service: Arc<RelayService>,
) -> Result<Response, warp::reject::Rejection> {
    let outcome = match PassthroughBody::parse(&body) {
        Ok(request) => {
            debug!(method = %request.method, "Passthrough request");
            relay_service.passthrough(request).await
        }
        Err(e) => Err(relay_service.reject_passthrough(e)),
    };
    Ok(ResponseFormatter::enveloped(outcome))
}
