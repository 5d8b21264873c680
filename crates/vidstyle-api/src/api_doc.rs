//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

/// Returns the OpenAPI document served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "vidstyle API",
        version = "0.1.0",
        description = "Upload a short video, apply a visual style (pixel, cartoon, grayscale) and download the re-encoded MP4."
    ),
    paths(
        handlers::convert::convert_video,
        handlers::converted_file::get_converted_file,
    ),
    components(
        schemas(
            handlers::convert::ConvertResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "convert", description = "Video style conversion")
    )
)]
pub struct ApiDoc;
