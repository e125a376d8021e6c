pub mod config;
pub mod error;
pub mod logging;
pub mod receipt;
pub mod scoring;
pub mod server;
pub mod store;
pub mod validation;
