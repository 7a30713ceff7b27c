//! Build command implementation
//!
//! Drives make against the generated build tree.

use anyhow::Result;
use clap::Args;

use super::clean::CleanCommand;
use super::gen::GenCommand;
use super::Context;
use crate::exec::{CommandLine, Executor};

/// Compile the project in build/
#[derive(Args, Debug, Default, Clone)]
pub struct BuildCommand {
    /// Clean build/ before building
    #[arg(long, overrides_with = "no_clean")]
    pub clean: bool,

    /// Do not clean build/ first (default)
    #[arg(long, overrides_with = "clean")]
    pub no_clean: bool,

    /// Regenerate build files before building
    #[arg(long, overrides_with = "no_gen")]
    pub gen: bool,

    /// Reuse the existing build files (default)
    #[arg(long, overrides_with = "gen")]
    pub no_gen: bool,
}

impl BuildCommand {
    fn should_clean(&self) -> bool {
        self.clean && !self.no_clean
    }

    fn should_gen(&self) -> bool {
        self.gen && !self.no_gen
    }

    /// Execute the build command
    pub fn execute<E: Executor>(&self, ctx: &mut Context<E>) -> Result<()> {
        if self.should_clean() {
            CleanCommand::default().execute(ctx)?;
        }

        // gen runs with its own defaults; our --clean has already happened
        if self.should_gen() {
            GenCommand::default().execute(ctx)?;
        }

        let cmd = CommandLine::new(ctx.config.make.clone(), "compiling the project")
            .args(ctx.config.make_args());
        ctx.launch(cmd);

        Ok(())
    }
}
