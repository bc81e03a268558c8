//! HTTP utilities - dependency injection filters

use std::sync::Arc;
use warp::Filter;

use crate::{application::services::RelayService, shared::metrics::RelayMetrics};

/// Helper function to inject the relay service into a route
pub fn with_relay_service(
    relay_service: Arc<RelayService>,
) -> impl Filter<Extract = (Arc<RelayService>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || relay_service.clone())
}

/// Helper function to inject the metrics registry into a route
pub fn with_metrics(
    metrics: Arc<RelayMetrics>,
) -> impl Filter<Extract = (Arc<RelayMetrics>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || metrics.clone())
}
