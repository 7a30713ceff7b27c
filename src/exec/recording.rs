//! In-memory executor for tests

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{ClearReport, CommandLine, CommandResult, Executor};
use crate::error::RunnerError;

/// One side effect requested by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Clear(PathBuf),
    Run(CommandLine),
}

/// Records every request and reports success
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub steps: Vec<Step>,

    /// Exit code returned for every run
    pub exit_code: i32,
}

impl RecordingExecutor {
    /// Steps rendered as strings, e.g. `clear build` or `make -C build`
    pub fn transcript(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Clear(dir) => format!("clear {}", dir.display()),
                Step::Run(cmd) => cmd.to_string(),
            })
            .collect()
    }
}

impl Executor for RecordingExecutor {
    fn clear_dir(&mut self, dir: &Path) -> Result<ClearReport, RunnerError> {
        self.steps.push(Step::Clear(dir.to_path_buf()));
        Ok(ClearReport::default())
    }

    fn run(&mut self, cmd: &CommandLine) -> Result<CommandResult, RunnerError> {
        self.steps.push(Step::Run(cmd.clone()));
        Ok(CommandResult {
            success: self.exit_code == 0,
            exit_code: Some(self.exit_code),
            duration: Duration::ZERO,
        })
    }
}
