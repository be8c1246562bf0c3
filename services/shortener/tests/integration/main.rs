
mod identity_test;
mod resolve_test;
mod shorten_test;
