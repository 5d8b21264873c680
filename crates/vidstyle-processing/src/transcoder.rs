//! ffmpeg transcoder: decode, apply the style filter, re-encode to H.264/MP4.

use crate::probe::{validate_binary_path, VideoProbe};
use crate::style::VideoStyle;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Video codec every artifact is encoded with.
pub const OUTPUT_VIDEO_CODEC: &str = "libx264";

/// Converts one clip on disk into a styled MP4.
#[async_trait]
pub trait VideoTranscoder: Send + Sync {
    /// Transcode `input` into `output`, applying `style` to every frame.
    async fn transcode(&self, input: &Path, output: &Path, style: VideoStyle) -> Result<()>;

    /// Check that the underlying tooling is usable.
    async fn health_check(&self) -> Result<()>;
}

pub struct FfmpegTranscoder {
    ffmpeg_path: String,
    probe: VideoProbe,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg_path: String, ffprobe_path: String) -> Result<Self> {
        validate_binary_path(&ffmpeg_path)
            .context("Invalid ffmpeg_path: contains dangerous characters")?;
        let probe = VideoProbe::new(ffprobe_path)?;

        Ok(Self { ffmpeg_path, probe })
    }
}

/// Command line for one transcode; `-y` because a stale artifact may share the name.
/// Only the first video and (if present) first audio stream are kept; subtitle and
/// data streams cannot always be carried into MP4.
fn transcode_args(input: &Path, output: &Path, filter: &str) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-hide_banner".to_string(),
        "-i".to_string(),
        input.to_string_lossy().to_string(),
        "-map".to_string(),
        "0:v:0".to_string(),
        "-map".to_string(),
        "0:a:0?".to_string(),
        "-sn".to_string(),
        "-dn".to_string(),
        "-vf".to_string(),
        filter.to_string(),
        "-c:v".to_string(),
        OUTPUT_VIDEO_CODEC.to_string(),
        "-pix_fmt".to_string(),
        "yuv420p".to_string(),
        "-c:a".to_string(),
        "aac".to_string(),
        "-movflags".to_string(),
        "+faststart".to_string(),
        "-f".to_string(),
        "mp4".to_string(),
        output.to_string_lossy().to_string(),
    ]
}

#[async_trait]
impl VideoTranscoder for FfmpegTranscoder {
    #[tracing::instrument(skip(self, input, output, style), fields(
        process.executable.path = %self.ffmpeg_path,
        ffmpeg.operation = "transcode",
        style = %style
    ))]
    async fn transcode(&self, input: &Path, output: &Path, style: VideoStyle) -> Result<()> {
        let start = Instant::now();

        let frame_size = if style.requires_frame_size() {
            Some(self.probe.frame_size(input).await?)
        } else {
            None
        };
        let filter = style.video_filter(frame_size)?;
        let args = transcode_args(input, output, &filter);

        tracing::debug!(filter = %filter, "Spawning ffmpeg");

        let result = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .context("Failed to execute ffmpeg")?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(anyhow!("FFmpeg transcode failed: {}", stderr.trim()));
        }

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            output = %output.display(),
            "Transcode completed"
        );
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        let status = Command::new(&self.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .context("Failed to execute ffmpeg")?;

        if !status.success() {
            return Err(anyhow!("ffmpeg -version exited with {}", status));
        }
        Ok(())
    }
}
