//! vidstyle API library
//!
//! HTTP handlers, middleware, and application setup for the video style converter.

mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
mod services;
pub mod setup;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use vidstyle_processing::{FfmpegTranscoder, VideoStyle, VideoTranscoder};
