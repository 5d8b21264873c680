//! Serves converted artifacts by name. No auth, no expiry.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use vidstyle_core::AppError;

/// Join `filename` onto `dir` only if it names a direct child.
fn safe_join(dir: &std::path::Path, filename: &str) -> Option<PathBuf> {
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains('\0')
    {
        return None;
    }
    Some(dir.join(filename))
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()) {
        Some(ext) if ext == "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[utoipa::path(
    get,
    path = "/converted/{filename}",
    tag = "convert",
    params(("filename" = String, Path, description = "Name returned in a downloadUrl")),
    responses(
        (status = 200, description = "File contents", content_type = "video/mp4"),
        (status = 404, description = "No such file", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_converted_file"))]
pub async fn get_converted_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, HttpAppError> {
    let not_found = || AppError::NotFound("File not found".to_string());

    let path = safe_join(state.config.converted_dir(), &filename).ok_or_else(not_found)?;

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found().into()),
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Failed to open converted file");
            return Err(AppError::from(e).into());
        }
    };

    let metadata = file.metadata().await.map_err(AppError::from)?;
    if !metadata.is_file() {
        return Err(not_found().into());
    }

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&filename))
        .header(header::CONTENT_LENGTH, metadata.len())
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}
