//! Balance and UTXO read routes

use std::collections::HashMap;
use std::sync::Arc;
use warp::Filter;

use crate::{
    application::services::RelayService,
    infrastructure::http::{
        handlers::{
            handle_address_balances, handle_latest_utxo, handle_top_balances,
            handle_total_balances,
        },
        utils::with_relay_service,
    },
};

/// Routes wrapping the node's balance methods
pub struct BalanceRoutes;

impl BalanceRoutes {
    /// GET /api/total-balances
    pub fn create_total_balances_route(
        relay_service: Arc<RelayService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("api" / "total-balances")
            .and(warp::get())
            .and(with_relay_service(relay_service))
            .and_then(handle_total_balances)
    }

    /// GET /api/top-balances
    pub fn create_top_balances_route(
        relay_service: Arc<RelayService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("api" / "top-balances")
            .and(warp::get())
            .and(with_relay_service(relay_service))
            .and_then(handle_top_balances)
    }

    /// GET /api/latest-utxo
    pub fn create_latest_utxo_route(
        relay_service: Arc<RelayService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("api" / "latest-utxo")
            .and(warp::get())
            .and(with_relay_service(relay_service))
            .and_then(handle_latest_utxo)
    }

    /// GET /address-balances?minConf=N
    pub fn create_address_balances_route(
        relay_service: Arc<RelayService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("address-balances")
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and(with_relay_service(relay_service))
            .and_then(handle_address_balances)
    }

    /// All balance routes combined
    pub fn create_routes(
        relay_service: Arc<RelayService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        Self::create_total_balances_route(relay_service.clone())
            .or(Self::create_top_balances_route(relay_service.clone()))
            .or(Self::create_latest_utxo_route(relay_service.clone()))
            .or(Self::create_address_balances_route(relay_service))
    }
}
