mod lz4_codec;
mod passthrough;
mod zlib_codec;
mod zstd_codec;

pub use lz4_codec::Lz4Codec;
pub use passthrough::PassThroughCodec;
pub use zlib_codec::ZlibCodec;
pub use zstd_codec::ZstdCodec;

use std::sync::Arc;

use parzip_core::Codec;

/// Resolve a codec from its CLI name.
///
/// The container format carries no codec identifier, so the decompressing
/// invocation must name the same codec that produced the file; both sides
/// default to zlib.
pub fn codec_by_name(name: &str, level: Option<i32>) -> anyhow::Result<Arc<dyn Codec>> {
    match name {
        "zlib" | "z" => {
            let level = level.unwrap_or(6);
            if !(0..=9).contains(&level) {
                anyhow::bail!("zlib level {} out of range (0-9)", level);
            }
            Ok(Arc::new(ZlibCodec::new(level as u32)))
        }
        "zstd" => {
            let level = level.unwrap_or(3);
            if !(1..=22).contains(&level) {
                anyhow::bail!("zstd level {} out of range (1-22)", level);
            }
            Ok(Arc::new(ZstdCodec::new(level)))
        }
        "lz4" | "l" => Ok(Arc::new(Lz4Codec)),
        "passthrough" | "pass" | "none" => Ok(Arc::new(PassThroughCodec)),
        other => anyhow::bail!(
            "unknown codec '{}'. Valid options: zlib, zstd, lz4, passthrough",
            other
        ),
    }
}
