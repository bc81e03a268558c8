//! HTTP middleware

pub mod cors;

pub use cors::CorsMiddleware;
