use parzip_core::Codec;

/// No-op codec: stores blocks verbatim, with no compression.
///
/// Useful for verifying the container round-trip independently of any codec,
/// and for data that is already compressed (JPEG, MP4) where a real codec
/// would only expand it.
pub struct PassThroughCodec;

impl Codec for PassThroughCodec {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn compress_bound(&self, raw_len: usize) -> usize {
        raw_len
    }

    fn compress_block(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress_block(&self, compressed: &[u8], max_raw: usize) -> anyhow::Result<Vec<u8>> {
        if compressed.len() > max_raw {
            anyhow::bail!(
                "stored block is {} bytes, over the {max_raw} byte capacity",
                compressed.len()
            );
        }
        Ok(compressed.to_vec())
    }
}
