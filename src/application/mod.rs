//! Application layer - orchestration between HTTP routes and the node

pub mod services;

pub use services::RelayService;
