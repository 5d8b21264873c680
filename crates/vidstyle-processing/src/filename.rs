//! Filename sanitizing for uploads and converted artifacts.

use unicode_normalization::UnicodeNormalization;

/// Prefix of every converted artifact.
pub const CONVERTED_PREFIX: &str = "converted_";

/// Container extension of every converted artifact.
pub const CONVERTED_EXTENSION: &str = "mp4";

const WINDOWS_DEVICE_FILES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Reduce an uploaded filename to something safe to join onto a directory.
///
/// Accents are folded away (NFKD, so `café` becomes `cafe`) and remaining
/// non-ASCII characters are dropped, path separators turn into word breaks,
/// whitespace runs become `_`, anything outside `[A-Za-z0-9_.-]` is removed and
/// leading/trailing dots and underscores are stripped. Returns `None` when
/// nothing usable is left.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let spaced: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let trimmed = filtered.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        return None;
    }

    let device_stem = trimmed.split('.').next().unwrap_or_default();
    if WINDOWS_DEVICE_FILES
        .iter()
        .any(|device| device.eq_ignore_ascii_case(device_stem))
    {
        return Some(format!("_{}", trimmed));
    }

    Some(trimmed.to_string())
}

/// Name of the artifact produced for a sanitized upload name:
/// `converted_<name without its last extension>.mp4`.
pub fn output_filename_for(sanitized: &str) -> String {
    let stem = match sanitized.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => sanitized,
    };
    format!("{}{}.{}", CONVERTED_PREFIX, stem, CONVERTED_EXTENSION)
}
