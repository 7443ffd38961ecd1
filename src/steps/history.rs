//! Best-effort removal of the template's `.git` directory.

use crate::error::BootstrapError;
use crate::layout::TemplateLayout;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum HistoryOutcome {
    /// No `.git` directory.
    Absent,
    Removed,
    /// Removal failed; carries the recoverable error.
    Failed(BootstrapError),
}

/// Deletes `.git` if it is a directory. Never fails the run.
pub fn remove_history(layout: &TemplateLayout) -> HistoryOutcome {
    remove_history_with(layout, |path| fs::remove_dir_all(path))
}

/// [`remove_history`] with the directory removal supplied by the caller.
pub fn remove_history_with<F>(layout: &TemplateLayout, remove: F) -> HistoryOutcome
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let path = layout.history_dir();
    if !path.is_dir() {
        log::debug!("No history directory at {}", path.display());
        return HistoryOutcome::Absent;
    }

    match remove(&path) {
        Ok(()) => {
            log::info!("Removed: {}", path.display());
            HistoryOutcome::Removed
        }
        Err(source) => {
            let err = BootstrapError::History { path, source };
            log::debug!("History removal failed: {}", err);
            HistoryOutcome::Failed(err)
        }
    }
}
