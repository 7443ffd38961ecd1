//! Pre-flight checks performed before the first mutation.
//!
//! Unlike `rules`, these functions touch the file system, but only to read.

use crate::error::{BootstrapError, Result};
use crate::layout::TemplateLayout;

/// Checks that the rename can proceed.
///
/// # Checks Performed
///
/// 1. Placeholder package `src/sample` exists and is a directory
/// 2. Target package `src/<name>` does not exist
///
/// # Errors
///
/// Returns the first failure. Nothing is modified.
pub fn preflight_checks(layout: &TemplateLayout) -> Result<()> {
    if !layout.old_package().is_dir() {
        return Err(BootstrapError::MissingSource(
            layout.old_package().to_path_buf(),
        ));
    }

    // Fail fast on collision instead of merging into an existing package
    if layout.new_package().exists() {
        return Err(BootstrapError::TargetExists(
            layout.new_package().to_path_buf(),
        ));
    }

    if !layout.root().join("pyproject.toml").is_file() {
        log::info!(
            "No pyproject.toml in {}; editable install may fail",
            layout.root().display()
        );
    }

    Ok(())
}
