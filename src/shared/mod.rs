// Shared kernel: cross-cutting errors, configuration and utilities

pub mod config;
pub mod errors;
pub mod utils;

pub use config::DirectoryConfig;
pub use errors::{AppError, AppResult};
