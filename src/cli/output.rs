//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console handles NO_COLOR and non-tty detection):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: paths, values, hints
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote task-def-updated.json`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ task-def.json is not valid JSON`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run this from the directory containing task-def.json`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value plain).
///
/// Example: `  image:  779424486071.dkr.ecr...`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(format!("{}:", label)).dim(), value);
}
