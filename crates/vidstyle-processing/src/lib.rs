//! vidstyle media processing library
//!
//! Upload validation, filename sanitizing, style selection and the ffmpeg
//! invocation that does the actual decode/filter/encode work.

pub mod filename;
pub mod probe;
pub mod style;
pub mod transcoder;
pub mod validator;

// Re-export commonly used types
pub use filename::{output_filename_for, sanitize_filename};
pub use probe::{FrameSize, VideoProbe};
pub use style::VideoStyle;
pub use transcoder::{FfmpegTranscoder, VideoTranscoder};
pub use validator::{UploadValidator, ValidationError};
