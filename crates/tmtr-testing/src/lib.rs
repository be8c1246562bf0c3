//! Test utilities for tmtr services.
//!
//! Shared fixtures and cookie helpers for integration tests. Import in
//! `#[cfg(test)]` blocks and `tests/` targets only, never in production
//! code.

pub mod auth;
pub mod fixture;
