//! Fixed-width, non-overlapping text chunking.
//!
//! Splits every `chunk_size` characters (not bytes, so multi-byte text is
//! never cut mid-codepoint). Chunks come out in document order and their
//! concatenation reproduces the input exactly; the final chunk holds the
//! remainder and may be shorter.

/// Split `text` into chunks of at most `chunk_size` characters.
///
/// Empty text produces no chunks. A `chunk_size` of zero also produces no
/// chunks; callers that treat zero as misuse should validate before calling.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    if text.is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        // Byte offset of the char `chunk_size` positions ahead, or end of text.
        let end = text[start..]
            .char_indices()
            .nth(chunk_size)
            .map(|(offset, _)| start + offset)
            .unwrap_or(text.len());

        chunks.push(text[start..end].to_string());
        start = end;
    }

    chunks
}
