pub mod cli;
pub mod config;
pub mod error;
pub mod init;
pub mod jikan;
pub mod mcp;
pub mod models;

pub use error::MalError;
