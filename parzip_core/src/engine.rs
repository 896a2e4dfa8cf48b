//! Parallel block engine.
//!
//! Workers claim block indices from a shared atomic counter instead of taking
//! a static partition, so a run of expensive blocks cannot strand one worker
//! while the rest sit idle. Results travel back over a channel tagged with
//! their block index and land in a pre-sized slot vector — output position
//! order never depends on completion order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use tracing::warn;

use crate::codec::Codec;

/// Compress every block concurrently, returning one output per block in
/// index order.
///
/// A block whose compression fails is logged and left as an empty slot;
/// sibling blocks are unaffected and the call itself never fails.
pub fn compress_all(codec: &dyn Codec, blocks: &[&[u8]], workers: usize) -> Vec<Vec<u8>> {
    run_blocks(blocks, workers, "compression", |raw| codec.compress_block(raw))
}

/// Decompress every record concurrently, returning one span per record in
/// index order.
///
/// Each worker accepts at most `max_raw` output bytes per record — the block
/// size is the only size known before decompression completes. A record that
/// fails degrades to an empty span exactly as in [`compress_all`].
pub fn decompress_all(
    codec: &dyn Codec,
    records: &[Vec<u8>],
    max_raw: usize,
    workers: usize,
) -> Vec<Vec<u8>> {
    run_blocks(records, workers, "decompression", |record| {
        codec.decompress_block(record, max_raw)
    })
}

fn run_blocks<S, F>(inputs: &[S], workers: usize, stage: &str, op: F) -> Vec<Vec<u8>>
where
    S: AsRef<[u8]> + Sync,
    F: Fn(&[u8]) -> anyhow::Result<Vec<u8>> + Sync,
{
    let count = inputs.len();
    let mut results: Vec<Vec<u8>> = vec![Vec::new(); count];
    if count == 0 {
        return results;
    }

    let workers = workers.clamp(1, count);
    let next = AtomicUsize::new(0);
    // Sized to hold every result so workers never block on send.
    let (tx, rx) = crossbeam_channel::bounded::<(usize, Vec<u8>)>(count);

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            let op = &op;
            scope.spawn(move || loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                if index >= count {
                    break;
                }
                let out = match op(inputs[index].as_ref()) {
                    Ok(out) => out,
                    Err(err) => {
                        warn!(block = index, error = %err, "block {stage} failed, slot left empty");
                        Vec::new()
                    }
                };
                if tx.send((index, out)).is_err() {
                    break;
                }
            });
        }
        drop(tx);

        // Drain on the spawning thread while workers run; slot addressing
        // restores index order regardless of completion order.
        for (index, out) in rx {
            results[index] = out;
        }
    });

    results
}
