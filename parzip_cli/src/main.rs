use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parzip_codecs::codec_by_name;
use parzip_core::config::{EngineConfig, DEFAULT_BLOCK_SIZE};
use parzip_core::walker::{self, Mode};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "parzip",
    about = "Block-parallel compressor for files and directory trees",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files and directory trees into .zip block containers
    Compress {
        /// Files or directories to compress
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        opts: EngineOpts,
    },
    /// Restore files and directory trees from .zip block containers
    Decompress {
        /// Containers or directories to restore
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        opts: EngineOpts,
    },
}

#[derive(Args)]
struct EngineOpts {
    /// Codec: zlib | zstd | lz4 | passthrough (must match on both sides)
    #[arg(short, long, default_value = "zlib")]
    codec: String,
    /// Compression level (zlib 0-9, zstd 1-22)
    #[arg(short, long)]
    level: Option<i32>,
    /// Raw bytes per block on the parallel path
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
    /// Worker threads per parallel block run (default: all hardware threads)
    #[arg(short, long)]
    threads: Option<usize>,
}

// ── Entry point ────────────────────────────────────────────────────────────

fn run(mode: Mode, paths: Vec<PathBuf>, opts: EngineOpts) -> anyhow::Result<bool> {
    if opts.block_size == 0 {
        anyhow::bail!("--block-size must be at least 1");
    }
    let codec = codec_by_name(&opts.codec, opts.level)?;

    let mut config = EngineConfig {
        block_size: opts.block_size,
        ..EngineConfig::default()
    };
    if let Some(threads) = opts.threads {
        config.workers = threads.max(1);
    }

    Ok(walker::run(&paths, mode, &config, codec))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (mode, paths, opts) = match cli.command {
        Commands::Compress { paths, opts } => (Mode::Compress, paths, opts),
        Commands::Decompress { paths, opts } => (Mode::Decompress, paths, opts),
    };

    let start = Instant::now();
    let ok = match run(mode, paths, opts) {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if ok {
        println!("Exiting with Success");
    } else {
        println!("Exiting with (some) Error(s)");
    }
    println!("Total processing time: {:.6} seconds", elapsed.as_secs_f64());

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
