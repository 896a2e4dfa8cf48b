//! Single-shot path for files at or below the large-file threshold.
//!
//! Small files gain nothing from block dispatch, so they are compressed on
//! the calling task's own thread as one block and stored as a single-record
//! container.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::codec::Codec;
use crate::config::EngineConfig;
use crate::container;

/// Compress `path` as a single block into its sibling container, then remove
/// the source. A zero-byte file yields one record holding the codec's
/// empty-input output.
pub fn compress_file(path: &Path, codec: &dyn Codec) -> anyhow::Result<()> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let compressed = codec
        .compress_block(&data)
        .with_context(|| format!("compressing {}", path.display()))?;

    let out_path = container::container_path(path);
    container::write_records(&out_path, std::slice::from_ref(&compressed))?;
    fs::remove_file(path).with_context(|| format!("removing source {}", path.display()))?;
    Ok(())
}

/// Restore the file a container was built from, then remove the container.
///
/// Every record is decompressed in order. The output capacity covers both
/// record shapes this path can meet: a record written here holds up to a
/// threshold's worth of raw bytes, while a record written by the block path
/// holds at most `block_size` — and a block-built container lands here
/// whenever its compressed size fell below the threshold.
pub fn decompress_file(
    path: &Path,
    config: &EngineConfig,
    codec: &dyn Codec,
) -> anyhow::Result<()> {
    let records = container::read_records(path)?;
    let max_raw = (config.large_file_threshold as usize).max(config.block_size);

    let mut restored = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let span = codec
            .decompress_block(record, max_raw)
            .with_context(|| format!("record {index} of {}", path.display()))?;
        restored.extend_from_slice(&span);
    }

    let out_path = container::restored_path(path);
    fs::write(&out_path, &restored)
        .with_context(|| format!("writing restored file {}", out_path.display()))?;
    fs::remove_file(path).with_context(|| format!("removing container {}", path.display()))?;
    Ok(())
}
