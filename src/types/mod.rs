pub mod config;
pub mod error;
pub mod hop;
pub mod receipt;
