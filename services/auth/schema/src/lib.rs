//! sea-orm entities owned by the auth service.

pub mod otps;
pub mod sessions;
pub mod users;
