//! External process execution
//!
//! Commands never touch the OS directly. They hand a [`CommandLine`] or a
//! directory to an [`Executor`], which lets the dispatcher be exercised
//! without CMake or make installed.

pub mod subprocess;

#[cfg(test)]
pub mod recording;

use std::fmt;
use std::path::Path;

use crate::error::RunnerError;

pub use subprocess::{ClearReport, CommandResult, SystemExecutor};

/// A program and its argument list, spelled exactly as the tool expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program name (looked up on PATH) or a path relative to the project root
    pub program: String,

    /// Arguments, one argv entry each
    pub args: Vec<String>,

    /// Short description used in error messages
    pub purpose: String,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            purpose: purpose.into(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Whether the program is a path rather than a bare name
    pub fn is_path(&self) -> bool {
        Path::new(&self.program).components().count() > 1
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// The two side effects the runner ever performs
pub trait Executor {
    /// Remove every entry inside `dir` (relative to the project root)
    fn clear_dir(&mut self, dir: &Path) -> Result<ClearReport, RunnerError>;

    /// Run a process to completion with inherited stdio
    fn run(&mut self, cmd: &CommandLine) -> Result<CommandResult, RunnerError>;
}
