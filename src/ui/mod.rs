//! User interface module - terminal output for the command-line tool.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Printing to stdout/stderr

pub mod formatter;

pub use formatter::{format_error, format_success, format_variable_update, format_version_change};

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Print a build path unstyled, so it can be captured by scripts.
pub fn display_build_path(path: &str) {
    println!("{}", path);
}

/// Print the old and new version after a bump.
pub fn display_version_change(old_version: &str, new_version: &str) {
    println!("{}", format_version_change(old_version, new_version));
}

/// Print a stylesheet variable that was written.
pub fn display_variable_update(file: &str, variable: &str, value: &str) {
    println!("{}", format_variable_update(file, variable, value));
}
