// HTTP adapter: axum router, handlers and error mapping.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
