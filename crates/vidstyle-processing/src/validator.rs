use crate::filename::sanitize_filename;

/// Reasons an upload is rejected before anything is written to disk
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No video file found")]
    MissingFile,

    #[error("Multiple video fields are not allowed")]
    MultipleFiles,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Invalid file extension: {extension} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },
}

/// Upload validator
///
/// Gates acceptance of an uploaded video on its filename and size. Content is not
/// inspected; ffmpeg is the judge of whether the bytes decode.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: usize, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.to_lowercase())
                .collect(),
        }
    }

    /// Validate file extension: the text after the last `.`, case-insensitive
    pub fn validate_extension(&self, filename: &str) -> Result<(), ValidationError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::InvalidExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(())
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate all aspects of an upload and return the sanitized filename to store it under
    pub fn validate_all(&self, filename: &str, file_size: usize) -> Result<String, ValidationError> {
        if filename.is_empty() {
            return Err(ValidationError::EmptyFilename);
        }
        self.validate_extension(filename)?;
        self.validate_file_size(file_size)?;

        sanitize_filename(filename)
            .ok_or_else(|| ValidationError::InvalidFilename(filename.to_string()))
    }
}
