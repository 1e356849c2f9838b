//! HTTP layer: axum handlers, routes, middleware stack, and configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
