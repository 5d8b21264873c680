//! Multipart extraction for the convert endpoint

use crate::constants::{STYLE_FIELD, VIDEO_FIELD};
use crate::error::HttpAppError;
use axum::extract::Multipart;
use bytes::Bytes;
use vidstyle_processing::ValidationError;

/// The file part of a convert request
#[derive(Debug)]
pub struct UploadedVideo {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Everything a convert request carries
#[derive(Debug, Default)]
pub struct ConvertForm {
    pub video: Option<UploadedVideo>,
    pub style: Option<String>,
}

/// Extract the `video` file part and the optional `style` field from a multipart form.
///
/// Field order does not matter. A `video` field sent without a filename is a plain
/// text field, not a file, and is ignored. Only one file part named `video` is accepted.
pub async fn extract_convert_form(mut multipart: Multipart) -> Result<ConvertForm, HttpAppError> {
    let mut form = ConvertForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == VIDEO_FIELD {
            let Some(filename) = field.file_name().map(|s| s.to_string()) else {
                continue;
            };
            if form.video.is_some() {
                return Err(ValidationError::MultipleFiles.into());
            }
            let content_type = field.content_type().map(|s| s.to_string());
            let data = field.bytes().await?;

            form.video = Some(UploadedVideo {
                filename,
                content_type,
                data,
            });
        } else if field_name == STYLE_FIELD {
            form.style = Some(field.text().await?);
        }
    }

    Ok(form)
}
