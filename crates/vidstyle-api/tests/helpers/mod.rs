//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p vidstyle-api`.
//! The transcoder is faked, so no ffmpeg binary is needed.

#![allow(dead_code)]

pub mod fixtures;
pub mod transcoder;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use vidstyle_api::setup::routes;
use vidstyle_api::state::AppState;
use vidstyle_core::{BaseConfig, Config, ConverterConfig, LogFormat};

pub use transcoder::FakeTranscoder;

/// Max upload size used by test apps.
pub const TEST_MAX_VIDEO_BYTES: usize = 16 * 1024;

/// Public base URL test apps put in front of download links.
pub const TEST_BASE_URL: &str = "http://media.test";

/// Test application: server, fake transcoder, and owned directories.
pub struct TestApp {
    pub server: TestServer,
    pub transcoder: Arc<FakeTranscoder>,
    pub _temp_dir: TempDir,
    upload_dir: PathBuf,
    converted_dir: PathBuf,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn converted_dir(&self) -> &Path {
        &self.converted_dir
    }

    /// Names of the files currently in `dir`, sorted.
    pub fn files_in(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .expect("Failed to read directory")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Setup a test app whose transcoder succeeds.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(FakeTranscoder::default()).await
}

/// Setup a test app around the given fake transcoder.
pub async fn setup_test_app_with(transcoder: FakeTranscoder) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");
    let converted_dir = temp_dir.path().join("converted");
    std::fs::create_dir_all(&upload_dir).expect("Failed to create upload dir");
    std::fs::create_dir_all(&converted_dir).expect("Failed to create converted dir");

    let config = create_test_config(upload_dir.clone(), converted_dir.clone());
    config.validate().expect("Test config should be valid");

    let transcoder = Arc::new(transcoder);
    let state = Arc::new(AppState::new(config.clone(), transcoder.clone()));

    let app = routes::setup_routes(&config, state)
        .await
        .expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        transcoder,
        _temp_dir: temp_dir,
        upload_dir,
        converted_dir,
    }
}

pub fn create_test_config(upload_dir: PathBuf, converted_dir: PathBuf) -> Config {
    let base = BaseConfig {
        server_port: 5000,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        log_format: LogFormat::Compact,
    };

    Config(Box::new(ConverterConfig {
        base,
        upload_dir,
        converted_dir,
        video_allowed_extensions: ["mp4", "mov", "avi", "mkv"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        max_video_size_bytes: TEST_MAX_VIDEO_BYTES,
        ffmpeg_path: "ffmpeg".to_string(),
        ffprobe_path: "ffprobe".to_string(),
        public_base_url: Some(TEST_BASE_URL.to_string()),
    }))
}

/// Multipart body with a `video` file part and an optional `style` field.
pub fn convert_form(filename: &str, data: Vec<u8>, style: Option<&str>) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename)
        .mime_type("video/mp4");
    let form = MultipartForm::new().add_part("video", part);
    match style {
        Some(style) => form.add_text("style", style),
        None => form,
    }
}
