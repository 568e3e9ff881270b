//! One-shot command line mode.

mod context;
mod flags;
pub mod prompts;
mod quiet;

pub use context::{Context, copy_output, write_output};
pub use flags::CliFlags;

use crate::error::Result;

/// Parse arguments and run. Help, version and usage errors exit via clap.
pub fn run(args: Vec<String>) -> Result<()> {
    Context::from_args(args).unwrap_or_else(|e| e.exit()).run()
}
