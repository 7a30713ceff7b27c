//! Error types and helpers for user-friendly error messages
//!
//! None of these errors stop the runner. A failed launch or clear is reported
//! with a hint and the command carries on, the same way a shell keeps going
//! after `command not found`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while talking to the outside world
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Tool/executable not found on PATH
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// The process could not be started
    #[error("Failed to execute {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
        hint: Option<String>,
    },

    /// An entry of the build directory could not be removed or listed
    #[error("Failed to clear {}", path.display())]
    Clear {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunnerError {
    /// Create a missing tool error with the stock install hint
    pub fn missing_tool(tool: impl Into<String>, required_for: impl Into<String>) -> Self {
        let tool = tool.into();
        let hint = hints::for_tool(&tool).to_string();
        Self::MissingTool {
            tool,
            required_for: required_for.into(),
            hint,
        }
    }

    /// Create a spawn error, adding a hint for the usual causes
    pub fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        let hint = match source.kind() {
            io::ErrorKind::NotFound => Some(hints::test_executable().to_string()),
            io::ErrorKind::PermissionDenied => {
                Some("Check that the file is executable (chmod +x).".to_string())
            }
            _ => None,
        };
        Self::Spawn {
            program: program.into(),
            source,
            hint,
        }
    }

    /// Create a clear error
    pub fn clear(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Clear {
            path: path.into(),
            source,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            RunnerError::MissingTool {
                required_for, hint, ..
            } => {
                eprintln!("  Required for: {}", required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            RunnerError::Spawn { source, hint, .. } => {
                eprintln!("  {}", source);
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            RunnerError::Clear { source, .. } => {
                eprintln!("  {}", source);
            }
        }

        eprintln!();
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake"
    }

    /// Get hint for missing make
    pub fn make() -> &'static str {
        "Install make with your platform's build essentials:\n\
         • macOS: xcode-select --install\n\
         • Ubuntu: sudo apt install build-essential"
    }

    /// Get hint for a test executable that does not exist yet
    pub fn test_executable() -> &'static str {
        "The test executable has not been built yet. Try:\n\
         • runner run --build\n\
         • or: runner gen && runner build"
    }

    /// Get hint for a tool by name
    pub fn for_tool(tool: &str) -> &'static str {
        match tool {
            "cmake" => cmake(),
            "make" => make(),
            _ => "Install this tool and ensure it's in your PATH",
        }
    }
}
