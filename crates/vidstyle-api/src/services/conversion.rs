//! Conversion service: persist the upload, transcode it, always drop the input.

use crate::state::AppState;
use std::path::{Path, PathBuf};
use std::time::Instant;
use vidstyle_core::AppError;
use vidstyle_processing::{output_filename_for, VideoStyle};

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub output_filename: String,
    pub output_path: PathBuf,
}

pub struct ConversionService<'a> {
    state: &'a AppState,
}

impl<'a> ConversionService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Convert an already validated upload.
    ///
    /// `sanitized_filename` must come from `UploadValidator::validate_all`. The
    /// scratch copy under the upload directory is removed whether or not the
    /// transcode succeeds; a partially written output is left in place.
    #[tracing::instrument(skip(self, data, style), fields(style = %style, size = data.len()))]
    pub async fn convert(
        &self,
        sanitized_filename: &str,
        data: &[u8],
        style: VideoStyle,
    ) -> Result<ConversionOutcome, AppError> {
        let input_path = self.state.config.upload_dir().join(sanitized_filename);
        let output_filename = output_filename_for(sanitized_filename);
        let output_path = self.state.config.converted_dir().join(&output_filename);

        if let Err(e) = tokio::fs::write(&input_path, data).await {
            tracing::error!(error = %e, path = %input_path.display(), "Failed to save upload");
            remove_input(&input_path).await;
            return Err(AppError::MediaConversionError(format!(
                "Failed to save upload: {}",
                e
            )));
        }

        let start = Instant::now();
        let result = self
            .state
            .transcoder
            .transcode(&input_path, &output_path, style)
            .await;

        remove_input(&input_path).await;

        match result {
            Ok(()) => {
                tracing::info!(
                    output = %output_filename,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Video converted"
                );
                Ok(ConversionOutcome {
                    output_filename,
                    output_path,
                })
            }
            Err(e) => {
                tracing::error!(
                    error = %format!("{:#}", e),
                    input = %input_path.display(),
                    "Video conversion failed"
                );
                Err(AppError::MediaConversionError(format!("{:#}", e)))
            }
        }
    }
}

async fn remove_input(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "Failed to remove temporary upload");
        }
    }
}
