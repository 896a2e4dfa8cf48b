//! Block-parallel path for files above the large-file threshold.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::codec::Codec;
use crate::config::EngineConfig;
use crate::{block, container, engine};

/// Compress `path` into its sibling container, then remove the source.
///
/// The file is read whole, split into `block_size` chunks, and the chunks
/// are compressed concurrently. Every block gets a record in the container;
/// a block whose compression failed is written as a zero-length record, so
/// record index always equals block index.
pub fn compress_file(path: &Path, config: &EngineConfig, codec: &dyn Codec) -> anyhow::Result<()> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let blocks = block::split(&data, config.block_size);
    let compressed = engine::compress_all(codec, &blocks, config.workers);

    let out_path = container::container_path(path);
    container::write_records(&out_path, &compressed)?;
    fs::remove_file(path).with_context(|| format!("removing source {}", path.display()))?;
    Ok(())
}

/// Restore the file a container was built from, then remove the container.
///
/// Records are decompressed concurrently with `block_size` output capacity
/// each. A record that fails to decompress yields an empty span, which the
/// joiner skips — the restored file then comes out shorter than the
/// original (see [`block::join`]).
pub fn decompress_file(
    path: &Path,
    config: &EngineConfig,
    codec: &dyn Codec,
) -> anyhow::Result<()> {
    let records = container::read_records(path)?;
    let spans = engine::decompress_all(codec, &records, config.block_size, config.workers);
    let restored = block::join(&spans);

    let out_path = container::restored_path(path);
    fs::write(&out_path, &restored)
        .with_context(|| format!("writing restored file {}", out_path.display()))?;
    fs::remove_file(path).with_context(|| format!("removing container {}", path.display()))?;
    Ok(())
}
