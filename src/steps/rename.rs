//! Renames the placeholder package directory.

use crate::error::{BootstrapError, Result};
use crate::layout::TemplateLayout;
use crate::verify::preflight_checks;

/// Moves `src/sample` to `src/<name>`.
///
/// Re-runs the pre-flight checks right before the move, so a caller that
/// skipped them still gets `MissingSource` / `TargetExists` rather than an
/// OS-dependent failure.
///
/// # Errors
///
/// - `MissingSource`: placeholder package is not a directory
/// - `TargetExists`: renamed package already exists
/// - `Rename`: the move itself failed
pub fn rename_package(layout: &TemplateLayout) -> Result<()> {
    preflight_checks(layout)?;

    let from = layout.old_package();
    let to = layout.new_package();

    log::debug!("Moving {} → {}", from.display(), to.display());

    crate::fs::move_dir(from, to).map_err(|source| BootstrapError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    log::info!("Moved: {} → {}", from.display(), to.display());
    Ok(())
}
