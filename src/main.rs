//! runner - developer front end for the dmt allocator library
//!
//! Wraps the CMake configure step, the make build and the test executable
//! behind four subcommands.
//!
//! ```text
//! runner gen --debug    → cmake -S . -B build/ -D DMT_BUILD_TESTS=ON -D DMT_DEBUG=ON ...
//! runner build --gen    → cmake ..., then make -C build
//! runner run --build    → make -C build, then ./build/tests/dmt-tests
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // usage errors exit with 1, --help/--version with 0
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    cli.execute()
}
