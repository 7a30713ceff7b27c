//! Run command implementation
//!
//! Launches the test executable with inherited stdio. Its exit code is not
//! inspected.

use anyhow::Result;
use clap::Args;

use super::build::BuildCommand;
use super::Context;
use crate::exec::{CommandLine, Executor};

/// Run the test executable
#[derive(Args, Debug, Default, Clone)]
pub struct RunCommand {
    /// Build before running
    #[arg(long, overrides_with = "no_build")]
    pub build: bool,

    /// Run the existing binary (default)
    #[arg(long, overrides_with = "build")]
    pub no_build: bool,
}

impl RunCommand {
    fn should_build(&self) -> bool {
        self.build && !self.no_build
    }

    /// Execute the run command
    pub fn execute<E: Executor>(&self, ctx: &mut Context<E>) -> Result<()> {
        if self.should_build() {
            BuildCommand::default().execute(ctx)?;
        }

        let exe = ctx.config.test_executable_path();
        ctx.launch(CommandLine::new(
            exe.to_string_lossy().into_owned(),
            "running the tests",
        ));

        Ok(())
    }
}
