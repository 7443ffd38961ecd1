//! Validation rules for project names.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{BootstrapError, Result};
use crate::layout::PLACEHOLDER;
use std::fmt;

/// Python hard keywords. These parse as identifiers but cannot name a module.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// A validated project name, usable as a Python package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates a project name against Python identifier rules.
///
/// Surrounding whitespace is trimmed first.
///
/// ## Rules
/// - Non-empty
/// - Starts with an ASCII letter or `_`
/// - Contains only `[A-Za-z0-9_]`
/// - Not a Python keyword
/// - Not the placeholder name itself
///
/// ## Warnings (non-fatal)
/// - Uppercase letters (PEP 8: package names are lowercase)
/// - Leading `_` (reads as a private module)
pub fn validate_project_name(raw: &str) -> Result<ProjectName> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(BootstrapError::EmptyName);
    }

    let invalid = |reason: String| BootstrapError::InvalidIdentifier(name.to_string(), reason);

    for (idx, ch) in name.chars().enumerate() {
        if !ch.is_ascii() {
            return Err(invalid(format!(
                "non-ASCII character '{}' at position {}",
                ch, idx
            )));
        }

        if idx == 0 && ch.is_ascii_digit() {
            return Err(invalid("cannot start with a digit".to_string()));
        }

        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(format!(
                "invalid character '{}' at position {}",
                ch, idx
            )));
        }
    }

    if PYTHON_KEYWORDS.contains(&name) {
        return Err(invalid("is a reserved Python keyword".to_string()));
    }

    if name == PLACEHOLDER {
        return Err(invalid("is already the template's placeholder name".to_string()));
    }

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        log::warn!("'{}' has uppercase (convention: lowercase package names)", name);
    }

    if name.starts_with('_') {
        log::warn!("'{}' starts with '_' (reads as a private module)", name);
    }

    Ok(ProjectName(name.to_string()))
}
