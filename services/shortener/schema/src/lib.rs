//! sea-orm entities owned by the shortener service.

pub mod links;
pub mod visits;
