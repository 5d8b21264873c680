//! Health check handlers and response types.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns status string "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(format!("{} is not a directory", path.display())),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

#[derive(serde::Serialize)]
pub(super) struct ReadinessResponse {
    pub status: &'static str,
    pub upload_dir: String,
    pub converted_dir: String,
    pub ffmpeg: String,
}

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - working directories exist and ffmpeg runs.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let upload_dir = run_check(
        TIMEOUT,
        ensure_dir(state.config.upload_dir()),
        "unhealthy",
    )
    .await;
    let converted_dir = run_check(
        TIMEOUT,
        ensure_dir(state.config.converted_dir()),
        "unhealthy",
    )
    .await;
    let ffmpeg = run_check(TIMEOUT, state.transcoder.health_check(), "unhealthy").await;

    let ready = [&upload_dir, &converted_dir, &ffmpeg]
        .iter()
        .all(|s| s.as_str() == "healthy");

    if !ready {
        tracing::warn!(
            upload_dir = %upload_dir,
            converted_dir = %converted_dir,
            ffmpeg = %ffmpeg,
            "Readiness check failed"
        );
    }

    let response = ReadinessResponse {
        status: if ready { "ready" } else { "not_ready" },
        upload_dir,
        converted_dir,
        ffmpeg,
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
