//! Command implementations for relnotes.
//!
//! relnotes has a single command, the release pipeline in [`release`].

mod release;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch parsed arguments to the release pipeline.
pub fn dispatch(cli: Cli) -> Result<()> {
    release::cmd_release(cli)
}
