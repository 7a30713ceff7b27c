//! Terminal output utilities

use console::style;

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}

/// Print a progress note to stderr, used for `--verbose` output
pub fn print_note(message: &str) {
    eprintln!("{} {}", style("::").cyan().bold(), message);
}

/// Disable styling on both streams
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}
