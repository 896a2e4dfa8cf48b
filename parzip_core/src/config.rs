/// Default raw bytes per block: 1 MiB.
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

/// Files strictly larger than this take the block-parallel path: 16 MiB.
pub const LARGE_FILE_THRESHOLD: u64 = 16 * 1024 * 1024;

/// Tuning knobs for the block engine and the directory scheduler.
///
/// Passed explicitly wherever it is needed; there is no process-wide mutable
/// configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Raw bytes per block (the last block of a file may be smaller).
    /// Must be at least 1.
    pub block_size: usize,
    /// Size cutoff between the single-shot direct path and the
    /// block-parallel path.
    pub large_file_threshold: u64,
    /// Worker threads per parallel block run.
    pub workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            large_file_threshold: LARGE_FILE_THRESHOLD,
            workers: num_cpus::get(),
        }
    }
}
