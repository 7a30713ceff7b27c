//! Subprocess execution and directory clearing against the real filesystem

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use walkdir::WalkDir;

use super::{CommandLine, Executor};
use crate::error::RunnerError;

/// Result of a subprocess execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
            duration,
        }
    }
}

/// Outcome of clearing a directory
#[derive(Debug, Default)]
pub struct ClearReport {
    /// Top-level entries removed
    pub removed: usize,

    /// Bytes held by the removed files
    pub freed_bytes: u64,

    /// Entries that could not be removed
    pub failures: Vec<RunnerError>,
}

/// Executor backed by `std::process` and `std::fs`, rooted at the project dir
#[derive(Debug)]
pub struct SystemExecutor {
    root: PathBuf,
}

impl SystemExecutor {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the program: bare names through PATH, paths against the root
    fn resolve(&self, cmd: &CommandLine) -> Result<PathBuf, RunnerError> {
        if cmd.is_path() {
            return Ok(self.root.join(&cmd.program));
        }
        which::which(&cmd.program)
            .map_err(|_| RunnerError::missing_tool(&cmd.program, &cmd.purpose))
    }
}

impl Executor for SystemExecutor {
    fn clear_dir(&mut self, dir: &Path) -> Result<ClearReport, RunnerError> {
        clear_dir_contents(&self.root.join(dir))
    }

    fn run(&mut self, cmd: &CommandLine) -> Result<CommandResult, RunnerError> {
        let program = self.resolve(cmd)?;
        run_command(&program, &cmd.args, &self.root)
            .map_err(|e| RunnerError::spawn(&cmd.program, e))
    }
}

/// Run a command in `cwd`, inheriting stdin/stdout/stderr, and wait for it
pub fn run_command(program: &Path, args: &[String], cwd: &Path) -> io::Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}

/// Remove everything inside `dir`, leaving `dir` itself in place.
///
/// Behaves like `rm -rf dir/*`: dot-entries are not matched by the glob and
/// stay, and a missing directory, or a `dir` that is not a directory at all,
/// is not an error.
pub fn clear_dir_contents(dir: &Path) -> Result<ClearReport, RunnerError> {
    let mut report = ClearReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound || !dir.is_dir() => return Ok(report),
        Err(e) => return Err(RunnerError::clear(dir, e)),
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.failures.push(RunnerError::clear(dir, e));
                continue;
            }
        };

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let size = entry_size(&path);
        // file_type() does not follow symlinks, so a link to a directory is
        // unlinked rather than recursed into.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let result = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };

        match result {
            Ok(()) => {
                report.removed += 1;
                report.freed_bytes += size;
            }
            Err(e) => report.failures.push(RunnerError::clear(path, e)),
        }
    }

    Ok(report)
}

fn entry_size(path: &Path) -> u64 {
    // a top-level symlink is unlinked, not followed
    WalkDir::new(path)
        .follow_root_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum()
}

/// Human-readable size, e.g. `3.40 MB`
pub fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}
