//! Download endpoint integration tests.
//!
//! Run with: `cargo test -p vidstyle-api --test converted_file_test`

mod helpers;

use helpers::fixtures::{fake_mp4, FAKE_OUTPUT};
use helpers::{convert_form, setup_test_app, TEST_BASE_URL};
use serde_json::Value;

#[tokio::test]
async fn test_download_after_convert() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/convert")
        .multipart(convert_form("clip.mkv", fake_mp4(256), Some("pixel")))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let download_url = body["downloadUrl"].as_str().expect("downloadUrl missing");
    let path = download_url
        .strip_prefix(TEST_BASE_URL)
        .expect("downloadUrl should start with the public base URL");
    assert_eq!(path, "/converted/converted_clip.mp4");

    let download = client.get(path).await;
    assert_eq!(download.status_code(), 200);
    assert_eq!(download.header("content-type"), "video/mp4");
    assert_eq!(download.as_bytes().as_ref(), FAKE_OUTPUT);
}

#[tokio::test]
async fn test_download_serves_files_placed_directly() {
    let app = setup_test_app().await;
    std::fs::write(app.converted_dir().join("notes.bin"), b"raw").unwrap();

    let response = app.client().get("/converted/notes.bin").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "application/octet-stream");
    assert_eq!(response.as_bytes().as_ref(), b"raw");
}

#[tokio::test]
async fn test_download_missing_file() {
    let app = setup_test_app().await;

    let response = app.client().get("/converted/converted_nope.mp4").await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "File not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_download_does_not_escape_converted_dir() {
    let app = setup_test_app().await;
    std::fs::write(app.upload_dir().join("secret.mp4"), b"secret").unwrap();

    for path in [
        "/converted/..%2Fuploads%2Fsecret.mp4",
        "/converted/..%5Cuploads%5Csecret.mp4",
        "/converted/..",
    ] {
        let response = app.client().get(path).await;
        assert_ne!(response.status_code(), 200, "{} must not be served", path);
        assert!(!response.text().contains("secret"));
    }
}

#[tokio::test]
async fn test_download_directory_is_not_found() {
    let app = setup_test_app().await;
    std::fs::create_dir(app.converted_dir().join("nested")).unwrap();

    let response = app.client().get("/converted/nested").await;

    assert_eq!(response.status_code(), 404);
}
