//! Configuration module
//!
//! Environment-driven configuration for the converter service: server settings,
//! working directories, upload limits and the ffmpeg toolchain location.

use std::env;
use std::path::{Path, PathBuf};

const SERVER_PORT: u16 = 5000;
const MAX_VIDEO_SIZE_MB: usize = 500;
const UPLOAD_DIR: &str = "uploads";
const CONVERTED_DIR: &str = "converted";
const VIDEO_ALLOWED_EXTENSIONS: &str = "mp4,mov,avi,mkv";

/// Console log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: LogFormat,
}

/// Converter configuration
#[derive(Clone, Debug)]
pub struct ConverterConfig {
    pub base: BaseConfig,
    /// Scratch directory for raw uploads
    pub upload_dir: PathBuf,
    /// Directory converted artifacts are written to and served from
    pub converted_dir: PathBuf,
    pub video_allowed_extensions: Vec<String>,
    pub max_video_size_bytes: usize,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    /// Overrides the host-derived base of download URLs
    pub public_base_url: Option<String>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ConverterConfig>);

impl Config {
    fn as_converter(&self) -> &ConverterConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_env(&self.as_converter().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = ConverterConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_converter().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_converter().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_converter().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_converter().base.environment
    }

    pub fn log_format(&self) -> LogFormat {
        self.as_converter().base.log_format
    }

    pub fn upload_dir(&self) -> &Path {
        &self.as_converter().upload_dir
    }

    pub fn converted_dir(&self) -> &Path {
        &self.as_converter().converted_dir
    }

    pub fn video_allowed_extensions(&self) -> &[String] {
        &self.as_converter().video_allowed_extensions
    }

    pub fn max_video_size_bytes(&self) -> usize {
        self.as_converter().max_video_size_bytes
    }

    pub fn ffmpeg_path(&self) -> &str {
        &self.as_converter().ffmpeg_path
    }

    pub fn ffprobe_path(&self) -> &str {
        &self.as_converter().ffprobe_path
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.as_converter().public_base_url.as_deref()
    }
}

fn is_production_env(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

/// Megabytes from the environment to bytes; unparsable or overflowing values are errors.
fn parse_size_mb(value: &str) -> Result<usize, anyhow::Error> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|mb| mb.checked_mul(1024 * 1024))
        .ok_or_else(|| anyhow::anyhow!("MAX_VIDEO_SIZE_MB must be a valid number"))
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl ConverterConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            log_format: LogFormat::parse(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
            ),
        };

        let config = ConverterConfig {
            base,
            upload_dir: PathBuf::from(
                env::var("UPLOAD_DIR").unwrap_or_else(|_| UPLOAD_DIR.to_string()),
            ),
            converted_dir: PathBuf::from(
                env::var("CONVERTED_DIR").unwrap_or_else(|_| CONVERTED_DIR.to_string()),
            ),
            video_allowed_extensions: parse_list(
                &env::var("VIDEO_ALLOWED_EXTENSIONS")
                    .unwrap_or_else(|_| VIDEO_ALLOWED_EXTENSIONS.to_string()),
            ),
            max_video_size_bytes: parse_size_mb(
                &env::var("MAX_VIDEO_SIZE_MB").unwrap_or_else(|_| MAX_VIDEO_SIZE_MB.to_string()),
            )?,
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if is_production_env(&self.base.environment)
            && self.base.cors_origins.iter().any(|o| o == "*")
        {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }

        if self.converted_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("CONVERTED_DIR must not be empty"));
        }

        if self.upload_dir == self.converted_dir {
            return Err(anyhow::anyhow!(
                "UPLOAD_DIR and CONVERTED_DIR must be different directories"
            ));
        }

        if self.video_allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "VIDEO_ALLOWED_EXTENSIONS must list at least one extension"
            ));
        }

        if self.max_video_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_VIDEO_SIZE_MB must be greater than 0"));
        }

        if let Some(url) = &self.public_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "PUBLIC_BASE_URL must start with http:// or https://"
                ));
            }
        }

        Ok(())
    }
}
