//! Handlers for the fixed balance and UTXO read routes

use std::collections::HashMap;
use std::sync::Arc;
use warp::reply::Response;

use crate::{
    application::services::RelayService,
    infrastructure::http::responses::ResponseFormatter,
    shared::validation::ValidationUtils,
};

pub async fn handle_total_balances(
    relay_service: Arc<RelayService>,
) -> Result<Response, warp::reject::Rejection> {
    Ok(ResponseFormatter::enveloped(relay_service.total_balances().await))
}

pub async fn handle_top_balances(
    relay_service: Arc<RelayService>,
) -> Result<Response, warp::reject::Rejection> {
    Ok(ResponseFormatter::enveloped(relay_service.top_balances().await))
}

pub async fn handle_latest_utxo(
    relay_service: Arc<RelayService>,
) -> Result<Response, warp::reject::Rejection> {
    Ok(ResponseFormatter::enveloped(relay_service.latest_utxo().await))
}

/// Address balances are returned bare, without the `result` envelope
pub async fn handle_address_balances(
    query: HashMap<String, String>,
    relay_service: Arc<RelayService>,
) -> Result<Response, warp::reject::Rejection> {
    let outcome = match ValidationUtils::parse_min_conf(&query) {
        Ok(min_conf) => relay_service.address_balances(min_conf).await,
        Err(e) => Err(e),
    };
    Ok(ResponseFormatter::raw(outcome))
}
