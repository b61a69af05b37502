//! Source line helpers for diagnostic rendering.
//!
//! Everything here works on raw bytes: source files need not be UTF-8,
//! and columns count bytes.

/// Byte range `start..end` of the line containing `offset`.
///
/// The range excludes the terminating `\n`. Offsets past the end clamp to
/// the last line.
pub fn line_bounds(source: &[u8], offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let start = memchr::memrchr(b'\n', &source[..offset]).map_or(0, |i| i + 1);
    let end = memchr::memchr(b'\n', &source[offset..]).map_or(source.len(), |i| offset + i);
    (start, end)
}

/// Text of the line containing `offset`, without its line ending.
///
/// A `\r` right before the `\n` is dropped too.
pub fn line_at(source: &[u8], offset: u32) -> &[u8] {
    let (start, end) = line_bounds(source, offset);
    let line = &source[start..end];
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Marker line pointing at 1-based `column` of `line`.
///
/// Each byte before the column becomes a space, except tabs which are
/// kept as tabs.
pub fn marker_line(line: &[u8], column: u32) -> Vec<u8> {
    let width = column.saturating_sub(1) as usize;
    let mut marker = Vec::with_capacity(width + 1);
    for i in 0..width {
        marker.push(if line.get(i) == Some(&b'\t') { b'\t' } else { b' ' });
    }
    marker.push(b'^');
    marker
}

/// 1-based `(line, column)` of `offset`, computed from the start.
#[allow(
    clippy::cast_possible_truncation,
    reason = "counts are bounded by the source length which fits in u32"
)]
pub fn offset_to_line_col(source: &[u8], offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = memchr::memchr_iter(b'\n', before).count() + 1;
    let line_start = memchr::memrchr(b'\n', before).map_or(0, |i| i + 1);
    (line as u32, (offset - line_start + 1) as u32)
}
