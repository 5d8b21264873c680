//! vidstyle core library
//!
//! Configuration and the unified error type shared by the processing and API crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{BaseConfig, Config, ConverterConfig, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
