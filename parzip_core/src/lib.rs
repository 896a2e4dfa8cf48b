pub mod block;
pub mod codec;
pub mod config;
pub mod container;
pub mod direct;
pub mod engine;
pub mod large;
pub mod walker;

pub use codec::Codec;
pub use config::{EngineConfig, DEFAULT_BLOCK_SIZE, LARGE_FILE_THRESHOLD};
pub use walker::{run, Mode};
