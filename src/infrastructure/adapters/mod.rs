//! Infrastructure adapters module
//!
//! Adapters for the services the relay talks to.

pub mod node_rpc;

pub use node_rpc::{NodeRpc, NodeRpcAdapter};
