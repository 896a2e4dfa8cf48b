use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use parzip_core::Codec;

/// zlib block codec — the default.
///
/// Each block is a complete, independent zlib stream produced by a one-shot
/// deflate, so any block can be decompressed without touching its neighbors.
/// Decompression honors the caller's capacity strictly: raw lengths are not
/// stored anywhere, and a payload that does not fit `max_raw` is an error,
/// not a short read.
pub struct ZlibCodec {
    /// Compression level (0 = store, 9 = smallest).
    pub level: u32,
}

impl Default for ZlibCodec {
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl ZlibCodec {
    pub fn new(level: u32) -> Self {
        Self { level }
    }
}

impl Codec for ZlibCodec {
    fn name(&self) -> &'static str {
        "zlib"
    }

    /// Classic zlib bound: input size plus a small per-16K overhead plus the
    /// stream wrapper.
    fn compress_bound(&self, raw_len: usize) -> usize {
        raw_len + (raw_len >> 12) + (raw_len >> 14) + (raw_len >> 25) + 13
    }

    fn compress_block(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut encoder = Compress::new(Compression::new(self.level), true);
        let mut out = Vec::with_capacity(self.compress_bound(raw.len()));
        match encoder.compress_vec(raw, &mut out, FlushCompress::Finish)? {
            Status::StreamEnd => Ok(out),
            status => anyhow::bail!("zlib compression did not complete: {status:?}"),
        }
    }

    fn decompress_block(&self, compressed: &[u8], max_raw: usize) -> anyhow::Result<Vec<u8>> {
        let mut decoder = Decompress::new(true);
        let mut out = Vec::with_capacity(max_raw);
        match decoder.decompress_vec(compressed, &mut out, FlushDecompress::Finish)? {
            Status::StreamEnd => Ok(out),
            _ => anyhow::bail!(
                "zlib payload is corrupt or exceeds the {max_raw} byte output capacity"
            ),
        }
    }
}
