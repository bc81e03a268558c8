//! Dashboard client
//!
//! Polls the relay on a fixed interval and keeps the last good snapshot for
//! rendering. A failed poll is logged and skipped.

pub mod client;
pub mod poller;
pub mod snapshot;

pub use client::{RelayClient, SnapshotSource};
pub use poller::DashboardPoller;
pub use snapshot::{render, DashboardSnapshot};
