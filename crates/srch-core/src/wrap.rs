//! Terminal-width line chunking for underscored output.

/// One terminal-width slice of a longer string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Byte offset of this chunk within the full string.
    pub offset: usize,
    /// The chunk text.
    pub text: &'a str,
}

/// Split `full` into chunks of at most `width` characters, in order.
///
/// Concatenating the chunks reproduces `full` exactly. Each chunk
/// carries its byte offset so callers can re-base span positions into
/// the chunk's own coordinate space. Widths below 1 are treated as 1.
///
/// # Examples
///
/// ```rust
/// use srch_core::wrap;
///
/// let chunks = wrap("abcdef", 4);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "abcd");
/// assert_eq!(chunks[1].text, "ef");
/// assert_eq!(chunks[1].offset, 4);
/// ```
#[must_use]
pub fn wrap(full: &str, width: usize) -> Vec<Chunk<'_>> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in full.char_indices() {
        if count == width {
            chunks.push(Chunk {
                offset: start,
                text: &full[start..idx],
            });
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if !full.is_empty() {
        chunks.push(Chunk {
            offset: start,
            text: &full[start..],
        });
    }
    chunks
}
