//! Fixed project layout and tool names
//!
//! The runner has no configuration file. Everything it needs to know about the
//! project is captured here, and the argument lists handed to CMake and make
//! are derived from these values.

use std::path::PathBuf;

/// Project constants used by every command
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Build directory, relative to the project root
    pub build_dir: String,

    /// Prefix of the project's CMake options (`<prefix>_BUILD_TESTS`, ...)
    pub option_prefix: String,

    /// Test executable, relative to the build directory
    pub test_executable: PathBuf,

    /// Build-configuration tool
    pub cmake: String,

    /// Build driver
    pub make: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            build_dir: "build".to_string(),
            option_prefix: "DMT".to_string(),
            test_executable: PathBuf::from("tests").join("dmt-tests"),
            cmake: "cmake".to_string(),
            make: "make".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Base arguments for the configure step: source `.`, binary dir `build/`,
    /// test target enabled.
    pub fn configure_args(&self) -> Vec<String> {
        vec![
            "-S".to_string(),
            ".".to_string(),
            "-B".to_string(),
            format!("{}/", self.build_dir),
            "-D".to_string(),
            format!("{}_BUILD_TESTS=ON", self.option_prefix),
        ]
    }

    /// Extra configure arguments for a debug build
    pub fn debug_args(&self) -> Vec<String> {
        vec![
            "-D".to_string(),
            format!("{}_DEBUG=ON", self.option_prefix),
            "-D".to_string(),
            "CMAKE_BUILD_TYPE=Debug".to_string(),
        ]
    }

    /// Arguments for the build driver
    pub fn make_args(&self) -> Vec<String> {
        vec!["-C".to_string(), self.build_dir.clone()]
    }

    /// Path of the test executable, relative to the project root
    pub fn test_executable_path(&self) -> PathBuf {
        PathBuf::from(".")
            .join(&self.build_dir)
            .join(&self.test_executable)
    }
}
