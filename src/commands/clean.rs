//! Clean command implementation

use anyhow::Result;
use clap::Args;

use super::Context;
use crate::exec::Executor;

/// Remove the contents of build/
#[derive(Args, Debug, Default, Clone)]
pub struct CleanCommand {}

impl CleanCommand {
    /// Execute the clean command
    pub fn execute<E: Executor>(&self, ctx: &mut Context<E>) -> Result<()> {
        ctx.clear_build_dir();
        Ok(())
    }
}
