use lz4_flex::{compress_prepend_size, decompress_size_prepended};

use parzip_core::Codec;

/// LZ4 block codec.
///
/// Fastest decompression of the bundled codecs; best when decode speed
/// matters more than size reduction.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compress_bound(&self, raw_len: usize) -> usize {
        // Worst-case LZ4 output plus the 4-byte size prefix.
        lz4_flex::block::get_maximum_output_size(raw_len) + 4
    }

    fn compress_block(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(compress_prepend_size(raw))
    }

    fn decompress_block(&self, compressed: &[u8], max_raw: usize) -> anyhow::Result<Vec<u8>> {
        let raw = decompress_size_prepended(compressed)
            .map_err(|e| anyhow::anyhow!("lz4 decompress error: {}", e))?;
        if raw.len() > max_raw {
            anyhow::bail!(
                "lz4 block decompressed to {} bytes, over the {max_raw} byte capacity",
                raw.len()
            );
        }
        Ok(raw)
    }
}
