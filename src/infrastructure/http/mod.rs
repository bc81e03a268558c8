//! HTTP infrastructure module
//!
//! Models, responses, handlers, routes and the server for the relay API.

pub mod handlers;
pub mod models;
pub mod responses;
pub mod routes;
pub mod server;
pub mod utils;

pub use models::{ErrorBody, PassthroughBody, ResultEnvelope};
pub use responses::ResponseFormatter;
pub use server::HttpServer;
