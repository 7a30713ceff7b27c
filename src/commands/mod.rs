//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.
//! Commands chain by calling each other's `execute` directly with default
//! options, never by re-entering the CLI.

pub mod build;
pub mod clean;
pub mod gen;
pub mod run;

use std::path::Path;

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::exec::subprocess::format_size;
use crate::exec::{CommandLine, Executor};
use crate::utils::terminal::{print_note, print_warning};

/// Everything a command needs: project constants, an executor, verbosity
#[derive(Debug)]
pub struct Context<E> {
    pub config: RunnerConfig,
    pub executor: E,
    pub verbose: bool,
}

impl<E: Executor> Context<E> {
    pub fn new(config: RunnerConfig, executor: E, verbose: bool) -> Self {
        Self {
            config,
            executor,
            verbose,
        }
    }

    /// Run an external command and wait for it.
    ///
    /// The child's exit status never changes the runner's own outcome; it is
    /// only mentioned in verbose mode. Launch failures are printed and the
    /// caller carries on.
    pub fn launch(&mut self, cmd: CommandLine) {
        if self.verbose {
            print_note(&format!("Running: {}", cmd));
        }

        match self.executor.run(&cmd) {
            Ok(result) => {
                if self.verbose && !result.success {
                    match result.exit_code {
                        Some(code) => print_note(&format!(
                            "{} exited with code {} after {:.2?}",
                            cmd.program, code, result.duration
                        )),
                        None => print_note(&format!("{} terminated by signal", cmd.program)),
                    }
                }
            }
            Err(e) => e.display_with_hints(),
        }
    }

    /// Clear the contents of the build directory
    pub fn clear_build_dir(&mut self) {
        let build_dir = self.config.build_dir.clone();
        if self.verbose {
            print_note(&format!("Clearing {}/*", build_dir));
        }

        match self.executor.clear_dir(Path::new(&build_dir)) {
            Ok(report) => {
                for failure in &report.failures {
                    print_warning(&format!("{}: {}", failure, source_message(failure)));
                }
                if self.verbose {
                    print_note(&format!(
                        "Removed {} entries from {}/ ({} freed)",
                        report.removed,
                        build_dir,
                        format_size(report.freed_bytes)
                    ));
                }
            }
            Err(e) => e.display_with_hints(),
        }
    }
}

fn source_message(err: &RunnerError) -> String {
    std::error::Error::source(err)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
