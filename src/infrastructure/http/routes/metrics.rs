//! Metrics route module

use std::sync::Arc;
use warp::Filter;

use crate::{
    infrastructure::http::{handlers::handle_metrics_request, utils::with_metrics},
    shared::metrics::RelayMetrics,
};

/// Metrics routes configuration
pub struct MetricsRoutes;

impl MetricsRoutes {
    /// GET /metrics in the Prometheus text format
    pub fn create_metrics_route(
        metrics: Arc<RelayMetrics>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("metrics")
            .and(warp::get())
            .and(with_metrics(metrics))
            .and_then(handle_metrics_request)
    }
}
