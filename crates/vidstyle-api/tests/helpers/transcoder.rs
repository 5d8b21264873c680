//! In-memory stand-in for the ffmpeg transcoder.

use super::fixtures::FAKE_OUTPUT;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use vidstyle_api::{VideoStyle, VideoTranscoder};

/// One recorded `transcode` invocation.
#[derive(Debug, Clone)]
pub struct TranscodeCall {
    pub input: PathBuf,
    pub output: PathBuf,
    pub style: VideoStyle,
    /// Whether the input file was on disk when the transcoder ran
    pub input_existed: bool,
    pub input_len: u64,
}

#[derive(Default)]
pub struct FakeTranscoder {
    fail: bool,
    unhealthy: bool,
    calls: Mutex<Vec<TranscodeCall>>,
}

impl FakeTranscoder {
    /// Writes a truncated output and then reports failure, like an ffmpeg crash mid-encode.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<TranscodeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoTranscoder for FakeTranscoder {
    async fn transcode(&self, input: &Path, output: &Path, style: VideoStyle) -> anyhow::Result<()> {
        let metadata = tokio::fs::metadata(input).await.ok();
        self.calls.lock().unwrap().push(TranscodeCall {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            style,
            input_existed: metadata.is_some(),
            input_len: metadata.map(|m| m.len()).unwrap_or(0),
        });

        if self.fail {
            tokio::fs::write(output, &FAKE_OUTPUT[..4]).await?;
            anyhow::bail!("FFmpeg transcode failed: Invalid data found when processing input");
        }

        tokio::fs::write(output, FAKE_OUTPUT).await?;
        Ok(())
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        if self.unhealthy {
            anyhow::bail!("ffmpeg not found");
        }
        Ok(())
    }
}
