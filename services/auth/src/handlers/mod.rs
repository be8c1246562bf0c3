pub mod account;
pub mod google;
pub mod token;
