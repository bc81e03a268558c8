//! Domain layer - RPC rules independent of HTTP and transport

pub mod health;
pub mod passthrough;
pub mod rpc;

pub use health::HealthResponse;
pub use passthrough::PassthroughPolicy;
pub use rpc::{methods, RpcEnvelope, RpcError, RpcReply, RpcRequest};
