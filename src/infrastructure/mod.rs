pub mod client;
pub mod neodb;
