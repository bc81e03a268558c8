//! Balance Relay - HTTP relay and polling dashboard for a UTXO node
//!
//! The relay translates a handful of HTTP routes into authenticated JSON-RPC
//! calls against the node daemon and maps replies and failures back to HTTP.
//! The dashboard polls the relay and renders the latest good snapshot.

pub mod application;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;
