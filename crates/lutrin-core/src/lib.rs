//! Shared web-service plumbing for Lutrin services.
//!
//! Health endpoints, gateway identity extraction, request-id middleware,
//! tracing setup, and serde helpers. No business logic lives here.

pub mod health;
pub mod identity;
pub mod middleware;
pub mod serde;
pub mod tracing;
