pub mod sniff;
pub mod store;
