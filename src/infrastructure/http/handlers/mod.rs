//! HTTP route handlers module
//!
//! One handler per endpoint; none of them let a failure escape as a rejection.

pub mod balances;
pub mod health;
pub mod metrics;
pub mod passthrough;
pub mod rejection;

pub use balances::{
    handle_address_balances, handle_latest_utxo, handle_top_balances, handle_total_balances,
};
pub use health::handle_health_request;
pub use metrics::handle_metrics_request;
pub use passthrough::handle_rpc_passthrough;
pub use rejection::handle_rejection;
