//! Route paths and multipart field names.

/// Multipart field carrying the uploaded clip.
pub const VIDEO_FIELD: &str = "video";

/// Multipart field carrying the style selector.
pub const STYLE_FIELD: &str = "style";

/// Route prefix converted artifacts are served under.
pub const CONVERTED_ROUTE: &str = "/converted";

/// Headroom on top of the max video size for multipart boundaries and text fields.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;
