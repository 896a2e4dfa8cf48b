/// Number of blocks needed to cover `len` bytes at `block_size` bytes per
/// block. An empty input has zero blocks.
pub fn block_count(len: usize, block_size: usize) -> usize {
    len.div_ceil(block_size)
}

/// Split `buffer` into blocks of at most `block_size` bytes.
///
/// Blocks are disjoint, cover the buffer exhaustively, and all but the last
/// are exactly `block_size` long. Block `i` covers the byte range
/// `[i * block_size, min((i + 1) * block_size, buffer.len()))`.
pub fn split(buffer: &[u8], block_size: usize) -> Vec<&[u8]> {
    buffer.chunks(block_size).collect()
}

/// Concatenate decompressed spans strictly in index order.
///
/// A span left empty by a failed decompression contributes nothing, so the
/// reassembled buffer is silently shorter than the original and every byte
/// after the failed block shifts forward. Callers that need exactness must
/// verify span lengths themselves.
pub fn join(spans: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = spans.iter().map(|s| s.len()).sum();
    let mut out = Vec::with_capacity(total);
    for span in spans {
        out.extend_from_slice(span);
    }
    out
}
