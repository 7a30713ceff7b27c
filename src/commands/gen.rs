//! Gen command implementation
//!
//! Runs the CMake configure step into build/.

use anyhow::Result;
use clap::Args;

use super::clean::CleanCommand;
use super::Context;
use crate::config::RunnerConfig;
use crate::exec::{CommandLine, Executor};
use crate::utils::terminal::print_info;

/// Generate build files with CMake
#[derive(Args, Debug, Default, Clone)]
pub struct GenCommand {
    /// Clean build/ before generating
    #[arg(long, overrides_with = "no_clean")]
    pub clean: bool,

    /// Do not clean build/ first (default)
    #[arg(long, overrides_with = "clean")]
    pub no_clean: bool,

    /// Configure a debug build with the library's debug checks enabled
    #[arg(long, overrides_with = "no_debug")]
    pub debug: bool,

    /// Configure a regular build (default)
    #[arg(long, overrides_with = "debug")]
    pub no_debug: bool,
}

impl GenCommand {
    fn should_clean(&self) -> bool {
        self.clean && !self.no_clean
    }

    fn is_debug(&self) -> bool {
        self.debug && !self.no_debug
    }

    /// Extra `-D` flags selected by the options
    pub fn flags(&self, config: &RunnerConfig) -> Vec<String> {
        let mut flags = Vec::new();
        if self.is_debug() {
            flags.extend(config.debug_args());
        }
        flags
    }

    /// Execute the gen command
    pub fn execute<E: Executor>(&self, ctx: &mut Context<E>) -> Result<()> {
        if self.should_clean() {
            CleanCommand::default().execute(ctx)?;
        }

        let flags = self.flags(&ctx.config);
        if !flags.is_empty() {
            print_info(&format!("using flags: {}", flags.join(" ")));
        }

        let cmd = CommandLine::new(ctx.config.cmake.clone(), "generating build files")
            .args(ctx.config.configure_args())
            .args(flags);
        ctx.launch(cmd);

        Ok(())
    }
}
