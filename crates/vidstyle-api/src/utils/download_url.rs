//! Download URL construction for converted artifacts

use crate::constants::CONVERTED_ROUTE;
use axum::http::{header, HeaderMap};

/// Base URL clients reach this server at: the configured override, otherwise
/// `<scheme>://<Host>` from the request.
pub fn request_base_url(public_base_url: Option<&str>, headers: &HeaderMap, port: u16) -> String {
    if let Some(base) = public_base_url {
        return base.trim_end_matches('/').to_string();
    }

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| format!("localhost:{}", port));

    format!("{}://{}", scheme, host)
}

pub fn download_url(base: &str, output_filename: &str) -> String {
    format!("{}{}/{}", base, CONVERTED_ROUTE, output_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:5000"));
        let base = request_base_url(None, &headers, 5000);
        assert_eq!(base, "http://example.com:5000");
        assert_eq!(
            download_url(&base, "converted_clip.mp4"),
            "http://example.com:5000/converted/converted_clip.mp4"
        );
    }

    #[test]
    fn honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("videos.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https, http"));
        assert_eq!(
            request_base_url(None, &headers, 5000),
            "https://videos.example.com"
        );
    }

    #[test]
    fn configured_base_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("internal:5000"));
        assert_eq!(
            request_base_url(Some("https://cdn.example.com/"), &headers, 5000),
            "https://cdn.example.com"
        );
    }

    #[test]
    fn falls_back_to_localhost() {
        assert_eq!(
            request_base_url(None, &HeaderMap::new(), 8080),
            "http://localhost:8080"
        );
    }
}
