//! Route builder module
//!
//! Assembles every relay route with CORS and rejection recovery.

use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

use crate::{
    application::services::RelayService,
    config::AppConfig,
    infrastructure::http::{
        handlers::handle_rejection,
        routes::{BalanceRoutes, HealthRoutes, MetricsRoutes, PassthroughRoutes},
    },
    middleware::cors::CorsMiddleware,
    shared::metrics::RelayMetrics,
};

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: &AppConfig,
        relay_service: Arc<RelayService>,
        metrics: Arc<RelayMetrics>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
        let health_route = HealthRoutes::create_health_route();
        let balance_routes = BalanceRoutes::create_routes(relay_service.clone());
        let rpc_route = PassthroughRoutes::create_rpc_route(config, relay_service);
        let metrics_route = MetricsRoutes::create_metrics_route(metrics);

        let cors = CorsMiddleware::new(config).filter();

        // Recover inside the CORS wrapper so error bodies carry CORS headers;
        // the outer recover handles rejections from CORS itself
        health_route
            .or(balance_routes)
            .or(rpc_route)
            .or(metrics_route)
            .recover(handle_rejection)
            .with(cors)
            .recover(handle_rejection)
    }
}
