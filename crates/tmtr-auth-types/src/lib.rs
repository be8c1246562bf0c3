//! Auth types shared across tmtr services.
//!
//! Provides JWT issue/validation, auth-cookie builders, and the `Identity`
//! extractor that turns the access-token cookie into a request identity.

pub mod cookie;
pub mod identity;
pub mod token;
