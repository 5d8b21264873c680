use crate::error::{ErrorResponse, HttpAppError};
use crate::services::ConversionService;
use crate::state::AppState;
use crate::utils::download_url::{download_url, request_base_url};
use crate::utils::upload::extract_convert_form;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use vidstyle_processing::{ValidationError, VideoStyle};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,
    /// Absolute URL the converted MP4 can be fetched from
    pub download_url: String,
}

#[utoipa::path(
    post,
    path = "/convert",
    tag = "convert",
    request_body(
        content = inline(Object),
        content_type = "multipart/form-data",
        description = "`video`: the clip (mp4, mov, avi, mkv). `style`: pixel, cartoon or grayscale (default)."
    ),
    responses(
        (status = 200, description = "Video converted", body = ConvertResponse),
        (status = 400, description = "Missing or invalid upload", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Conversion failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(operation = "convert_video"))]
pub async fn convert_video(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ConvertResponse>, HttpAppError> {
    let form = extract_convert_form(multipart?).await?;

    let video = form.video.ok_or(ValidationError::MissingFile)?;
    let style = form
        .style
        .as_deref()
        .map(VideoStyle::from_selector)
        .unwrap_or_default();

    let sanitized = state
        .validator
        .validate_all(&video.filename, video.data.len())?;

    tracing::info!(
        filename = %sanitized,
        content_type = video.content_type.as_deref().unwrap_or("unknown"),
        size = video.data.len(),
        style = %style,
        "Starting conversion"
    );

    let outcome = ConversionService::new(&state)
        .convert(&sanitized, &video.data, style)
        .await?;
    tracing::debug!(path = %outcome.output_path.display(), "Converted file written");

    let base = request_base_url(
        state.config.public_base_url(),
        &headers,
        state.config.server_port(),
    );

    Ok(Json(ConvertResponse {
        success: true,
        download_url: download_url(&base, &outcome.output_filename),
    }))
}
