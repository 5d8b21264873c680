//! Application state shared by all handlers.

use std::sync::Arc;
use vidstyle_core::Config;
use vidstyle_processing::{UploadValidator, VideoTranscoder};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub validator: UploadValidator,
    pub transcoder: Arc<dyn VideoTranscoder>,
}

impl AppState {
    pub fn new(config: Config, transcoder: Arc<dyn VideoTranscoder>) -> Self {
        let validator = UploadValidator::new(
            config.max_video_size_bytes(),
            config.video_allowed_extensions().to_vec(),
        );
        Self {
            config,
            validator,
            transcoder,
        }
    }
}
