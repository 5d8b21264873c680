//! Application setup and initialization
//!
//! Kept out of main.rs so tests can build the same router.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidstyle_core::Config;
use vidstyle_processing::FfmpegTranscoder;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    storage::setup_storage(&config).await?;

    let transcoder = FfmpegTranscoder::new(
        config.ffmpeg_path().to_string(),
        config.ffprobe_path().to_string(),
    )
    .context("Failed to initialize FFmpeg transcoder")?;
    let state = Arc::new(AppState::new(config.clone(), Arc::new(transcoder)));

    let router = routes::setup_routes(&config, state.clone()).await?;

    Ok((state, router))
}
