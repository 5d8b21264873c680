//! Local working directories

use anyhow::{Context, Result};
use vidstyle_core::Config;

/// Create the upload and converted directories if they do not exist yet.
pub async fn setup_storage(config: &Config) -> Result<()> {
    for dir in [config.upload_dir(), config.converted_dir()] {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    tracing::info!(
        upload_dir = %config.upload_dir().display(),
        converted_dir = %config.converted_dir().display(),
        "Storage directories ready"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidstyle_core::{BaseConfig, ConverterConfig, LogFormat};

    #[tokio::test]
    async fn creates_missing_directories() {
        let root = tempfile::tempdir().unwrap();
        let config = Config(Box::new(ConverterConfig {
            base: BaseConfig {
                server_port: 5000,
                cors_origins: vec!["*".to_string()],
                environment: "development".to_string(),
                log_format: LogFormat::Compact,
            },
            upload_dir: root.path().join("a/uploads"),
            converted_dir: root.path().join("b/converted"),
            video_allowed_extensions: vec!["mp4".to_string()],
            max_video_size_bytes: 1024,
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
            public_base_url: None,
        }));

        setup_storage(&config).await.unwrap();

        assert!(root.path().join("a/uploads").is_dir());
        assert!(root.path().join("b/converted").is_dir());
    }
}
