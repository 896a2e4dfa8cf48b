//! Recursive directory scheduler.
//!
//! Every filesystem entry becomes one scoped task. Directories fan out a
//! subtask per child from inside their own task, so the scope exit is the
//! join barrier for the whole recursion, nested spawns included. The only
//! state shared between tasks is the run-wide success flag.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, error};

use crate::codec::Codec;
use crate::config::EngineConfig;
use crate::{direct, large};

/// Whether an invocation packs sources into containers or restores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

struct WalkContext {
    mode: Mode,
    config: EngineConfig,
    codec: Arc<dyn Codec>,
    /// Aggregate success flag, ANDed across every leaf operation. Cleared on
    /// any failure and never re-set.
    ok: AtomicBool,
}

/// Process every path in `paths` — files routed by size, directories walked
/// recursively with one concurrent task per entry — and report whether every
/// leaf operation succeeded.
///
/// Individual failures clear the shared flag and are logged with path
/// context; they never stop sibling work. There is no cancellation: once
/// spawned, every task runs to completion.
pub fn run(paths: &[PathBuf], mode: Mode, config: &EngineConfig, codec: Arc<dyn Codec>) -> bool {
    let ctx = WalkContext {
        mode,
        config: config.clone(),
        codec,
        ok: AtomicBool::new(true),
    };

    rayon::scope(|scope| {
        for path in paths {
            spawn_entry(scope, &ctx, path.clone());
        }
    });

    ctx.ok.load(Ordering::Acquire)
}

fn spawn_entry<'a>(scope: &rayon::Scope<'a>, ctx: &'a WalkContext, path: PathBuf) {
    scope.spawn(move |scope| {
        if let Err(err) = process_entry(scope, ctx, &path) {
            error!(path = %path.display(), error = %err, "entry failed");
            ctx.ok.store(false, Ordering::Release);
        }
    });
}

fn process_entry<'a>(
    scope: &rayon::Scope<'a>,
    ctx: &'a WalkContext,
    path: &Path,
) -> anyhow::Result<()> {
    let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;

    if meta.is_dir() {
        // Children become sibling tasks. An unreadable entry is a recorded
        // failure, not a reason to stop enumerating the rest.
        let entries =
            fs::read_dir(path).with_context(|| format!("reading directory {}", path.display()))?;
        for entry in entries {
            match entry {
                Ok(entry) => spawn_entry(scope, ctx, entry.path()),
                Err(err) => {
                    error!(dir = %path.display(), error = %err, "unreadable directory entry");
                    ctx.ok.store(false, Ordering::Release);
                }
            }
        }
        return Ok(());
    }

    if meta.len() > ctx.config.large_file_threshold {
        debug!(path = %path.display(), size = meta.len(), "block-parallel path");
        match ctx.mode {
            Mode::Compress => large::compress_file(path, &ctx.config, ctx.codec.as_ref()),
            Mode::Decompress => large::decompress_file(path, &ctx.config, ctx.codec.as_ref()),
        }
    } else {
        debug!(path = %path.display(), size = meta.len(), "direct path");
        match ctx.mode {
            Mode::Compress => direct::compress_file(path, ctx.codec.as_ref()),
            Mode::Decompress => direct::decompress_file(path, &ctx.config, ctx.codec.as_ref()),
        }
    }
}
