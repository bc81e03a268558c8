//! Health routes module

use warp::Filter;

use crate::infrastructure::http::handlers::handle_health_request;

/// Health routes configuration
pub struct HealthRoutes;

impl HealthRoutes {
    /// GET /healthz
    pub fn create_health_route(
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("healthz")
            .and(warp::get())
            .and_then(handle_health_request)
    }
}
