//! Generic RPC passthrough route

use bytes::Bytes;
use std::sync::Arc;
use warp::{Filter, Rejection};

use crate::{
    application::services::RelayService,
    config::AppConfig,
    infrastructure::http::{handlers::handle_rpc_passthrough, utils::with_relay_service},
    shared::error::AppError,
};

/// Passthrough route configuration
pub struct PassthroughRoutes;

impl PassthroughRoutes {
    /// POST /api/rpc
    pub fn create_rpc_route(
        config: &AppConfig,
        relay_service: Arc<RelayService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("api" / "rpc")
            .and(warp::post())
            .and(Self::limited_body(config.server.max_request_size as u64))
            .and(with_relay_service(relay_service))
            .and_then(handle_rpc_passthrough)
    }

    /// Body capped at `limit` bytes. A request without `Content-Length`
    /// is read as well, so a bodyless POST reaches the handler.
    fn limited_body(
        limit: u64,
    ) -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
        warp::body::content_length_limit(limit)
            .or_else(|rejection: Rejection| async move {
                if rejection.find::<warp::reject::LengthRequired>().is_some() {
                    Ok(())
                } else {
                    Err(rejection)
                }
            })
            .and(warp::body::bytes())
            .and_then(move |body: Bytes| async move {
                if body.len() as u64 > limit {
                    Err(warp::reject::custom(AppError::PayloadTooLarge { limit }))
                } else {
                    Ok(body)
                }
            })
    }
}
