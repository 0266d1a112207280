//! Pure formatting functions for UI output.
//!
//! Everything here returns a `String` so the styling can be tested without a
//! terminal. Printing lives in the parent module.

use console::style;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a version change, e.g. after a bump.
///
/// # Arguments
/// * `old_version` - Version before the bump
/// * `new_version` - Version written to the descriptor
pub fn format_version_change(old_version: &str, new_version: &str) -> String {
    format!(
        "{}\n  From: {}\n  To:   {}",
        style("Version Change:").bold(),
        style(old_version).red(),
        style(new_version).green()
    )
}

/// Format a region update on a stylesheet.
pub fn format_variable_update(file: &str, variable: &str, value: &str) -> String {
    format!(
        "{} {} = {} in {}",
        style("→").yellow(),
        style(variable).cyan(),
        style(format!("\"{}\"", value)).green(),
        file
    )
}
