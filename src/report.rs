//! Terminal output.
//!
//! Status lines go to stdout in cargo's right-aligned verb style; warnings
//! and errors go to stderr.

use crate::error::BootstrapError;
use colored::Colorize;

/// Prints `{verb:>12} {message}` with a green verb.
pub fn status(verb: &str, message: impl std::fmt::Display) {
    println!("{:>12} {}", verb.green().bold(), message);
}

/// Like [`status`], for steps that are skipped or already done.
pub fn note(verb: &str, message: impl std::fmt::Display) {
    println!("{:>12} {}", verb.cyan().bold(), message);
}

/// Reports a recoverable error on stderr.
pub fn warn(err: &BootstrapError) {
    eprintln!("{} {}", "warning:".yellow().bold(), err);
}

/// The success line printed once the package is renamed and patched.
pub fn success_line(name: &str) -> String {
    format!("Project successfully renamed to '{}'.", name)
}

pub fn success(name: &str) {
    println!("\n{}", success_line(name).green().bold());
}

pub fn finished() {
    println!("\n{}", "✓ Bootstrap complete".green().bold());
}
