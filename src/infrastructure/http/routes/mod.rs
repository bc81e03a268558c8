//! HTTP routes module
//!
//! Route filters grouped by endpoint family.

pub mod balances;
pub mod builder;
pub mod health;
pub mod metrics;
pub mod passthrough;

pub use balances::BalanceRoutes;
pub use builder::RouteBuilder;
pub use health::HealthRoutes;
pub use metrics::MetricsRoutes;
pub use passthrough::PassthroughRoutes;
