//! Infrastructure layer - node transport and HTTP serving

pub mod adapters;
pub mod http;

pub use adapters::{NodeRpc, NodeRpcAdapter};
