//! Upload payloads. The fake transcoder never decodes them, so any bytes do.

/// Bytes that start like an MP4 `ftyp` box.
pub fn fake_mp4(len: usize) -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftypisom");
    data.resize(len.max(data.len()), 0xAB);
    data
}

/// Bytes written as the converted output by the fake transcoder.
pub const FAKE_OUTPUT: &[u8] = b"converted-output";
