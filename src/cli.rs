//! CLI argument parsing using clap derive macros

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use crate::commands::{
    build::BuildCommand, clean::CleanCommand, gen::GenCommand, run::RunCommand, Context,
};
use crate::config::RunnerConfig;
use crate::exec::{Executor, SystemExecutor};
use crate::utils::terminal::disable_colors;

/// Runner for the dmt allocator library
///
/// Configures, builds and runs the test suite through CMake and make.
#[derive(Parser, Debug)]
#[command(name = "runner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Echo external commands and report their exit status
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean the project (remove the contents of build/)
    Clean(CleanCommand),

    /// Generate build files into build/
    Gen(GenCommand),

    /// Build the project in build/
    Build(BuildCommand),

    /// Run the tests
    Run(RunCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            disable_colors();
        }

        let root = std::env::current_dir().context("Failed to get current working directory")?;
        let mut ctx = Context::new(
            RunnerConfig::default(),
            SystemExecutor::new(root),
            self.verbose,
        );

        self.command.dispatch(&mut ctx)
    }
}

impl Commands {
    /// Run the selected command against any executor
    pub fn dispatch<E: Executor>(&self, ctx: &mut Context<E>) -> Result<()> {
        match self {
            Commands::Clean(cmd) => cmd.execute(ctx),
            Commands::Gen(cmd) => cmd.execute(ctx),
            Commands::Build(cmd) => cmd.execute(ctx),
            Commands::Run(cmd) => cmd.execute(ctx),
        }
    }
}
