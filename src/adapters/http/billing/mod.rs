//! HTTP adapter for the billing module.
//!
//! - `routes` - Axum router wiring
//! - `handlers` - Request handlers and error mapping
//! - `dto` - Request/response JSON types

mod dto;
mod handlers;
mod routes;

pub use handlers::BillingAppState;
pub use routes::{billing_router, billing_routes, webhook_routes};
