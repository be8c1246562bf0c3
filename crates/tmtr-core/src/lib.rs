//! Shared HTTP plumbing for tmtr services.
//!
//! Health handlers, request-id middleware, tracing init, device-descriptor
//! extraction, and the `X-Message` response header helper.

pub mod device;
pub mod health;
pub mod message;
pub mod middleware;
pub mod serde;
pub mod tracing;
