//! Terminal output helpers.
//!
//! Pure formatting functions separated from resolution logic; everything here
//! only prints, nothing here decides.

use console::style;

use crate::skip::TagSkip;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print the resolved version.
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Format and print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a skipped tag diagnostic.
///
/// Only emitted in verbose mode; skipped tags are expected and benign.
pub fn display_skip(skip: &TagSkip) {
    eprintln!("{} {}", style("skipped:").yellow(), skip);
}
