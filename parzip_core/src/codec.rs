/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Must compress/decompress individual blocks independently — no cross-block
///   state or shared dictionary is permitted. This is the invariant that lets
///   blocks be processed concurrently and in any order.
/// - Must report a worst-case output size via `compress_bound`, so callers can
///   pre-size output buffers before compressing.
pub trait Codec: Send + Sync {
    /// Human-readable codec name for CLI display.
    fn name(&self) -> &'static str;

    /// Upper bound on the compressed size of `raw_len` input bytes.
    ///
    /// Never under-estimates: `compress_block` output always fits in a buffer
    /// of this capacity.
    fn compress_bound(&self, raw_len: usize) -> usize;

    /// Compress a single independent block.
    fn compress_block(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>>;

    /// Decompress a single independent block.
    ///
    /// The container stores no raw length, so the caller passes `max_raw`,
    /// the largest output it is prepared to accept. Fails if the payload is
    /// corrupt or would decompress to more than `max_raw` bytes.
    fn decompress_block(&self, compressed: &[u8], max_raw: usize) -> anyhow::Result<Vec<u8>>;
}
