pub mod resolve;
pub mod shorten;
pub mod visits;
