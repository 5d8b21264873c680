//! Style presets and the ffmpeg filter graph each one maps to.

use crate::probe::FrameSize;
use anyhow::{anyhow, Result};
use std::fmt;

/// Width the pixel style shrinks frames to before scaling back up.
pub const PIXEL_DOWNSCALE_WIDTH: u32 = 160;

/// libx264 with yuv420p needs even dimensions.
const EVEN_DIMENSIONS: &str = "scale=trunc(iw/2)*2:trunc(ih/2)*2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoStyle {
    /// Downscale then upscale back to the source size
    Pixel,
    /// Placeholder: renders exactly like grayscale
    Cartoon,
    #[default]
    Grayscale,
}

impl VideoStyle {
    /// Map a client selector to a style. Unknown selectors fall through to grayscale.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "pixel" => VideoStyle::Pixel,
            "cartoon" => VideoStyle::Cartoon,
            _ => VideoStyle::Grayscale,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStyle::Pixel => "pixel",
            VideoStyle::Cartoon => "cartoon",
            VideoStyle::Grayscale => "grayscale",
        }
    }

    /// Whether building the filter needs the source frame size
    pub fn requires_frame_size(&self) -> bool {
        matches!(self, VideoStyle::Pixel)
    }

    /// ffmpeg `-vf` argument for this style
    pub fn video_filter(&self, source: Option<FrameSize>) -> Result<String> {
        match self {
            VideoStyle::Pixel => {
                let size = source
                    .ok_or_else(|| anyhow!("pixel style needs the source frame size"))?
                    .even();
                Ok(format!(
                    "scale={}:-2,scale={}:{}:flags=neighbor",
                    PIXEL_DOWNSCALE_WIDTH, size.width, size.height
                ))
            }
            // No cartoon effect exists; it shares the grayscale graph.
            VideoStyle::Cartoon | VideoStyle::Grayscale => {
                Ok(format!("{},format=gray,format=yuv420p", EVEN_DIMENSIONS))
            }
        }
    }
}

impl fmt::Display for VideoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
