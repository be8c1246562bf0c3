//! Deterministic fixtures shared by service tests.

use tmtr_core::device::DeviceInfo;
use uuid::Uuid;

/// HMAC secret used across all test targets.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Stable user id so assertions can reference it without plumbing.
pub fn test_user_id() -> Uuid {
    Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap()
}

/// A recognizable desktop device descriptor.
pub fn test_device() -> DeviceInfo {
    DeviceInfo {
        browser: Some("Chrome".to_owned()),
        browser_version: Some("120.0.0.0".to_owned()),
        os: Some("macOS".to_owned()),
        os_version: Some("10.15.7".to_owned()),
    }
}

/// Unique email per call, for tests that insert multiple users.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4().simple())
}
