//! Error types for pyproject-bootstrap.
//!
//! All operations return `Result<T>` which aliases `Result<T, BootstrapError>`.
//! Most variants abort the run; [`BootstrapError::is_recoverable`] marks the
//! few that are reported and then skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Project name was empty after trimming.
    #[error("Project name cannot be empty")]
    EmptyName,

    /// Project name is not a valid Python identifier.
    #[error("'{0}' is not a valid Python identifier: {1}")]
    InvalidIdentifier(String, String),

    /// Placeholder package directory does not exist.
    #[error("Expected package directory {0} does not exist")]
    MissingSource(PathBuf),

    /// Renamed package directory already exists.
    #[error("Target directory already exists: {0}")]
    TargetExists(PathBuf),

    /// Moving the package directory failed.
    #[error("Failed to rename package directory {} → {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a patch target failed.
    ///
    /// Recoverable: the remaining files are still patched.
    #[error("Failed to patch {}: {source}", .path.display())]
    Patch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No Python interpreter available to create the environment.
    #[error("No Python interpreter found on PATH (tried {0}). Use --python to pass one")]
    InterpreterNotFound(String),

    /// `python -m venv` failed.
    #[error("Failed to create virtual environment: {0}")]
    VenvCreation(String),

    /// `pip install -e .` failed.
    #[error("Failed to install project: {0}")]
    Install(String),

    /// Removing version-control history failed.
    ///
    /// Recoverable: never changes the exit status.
    #[error("Failed to remove {}: {source}", .path.display())]
    History {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootstrapError {
    /// Returns `true` for errors that are reported but do not stop the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Patch { .. } | Self::History { .. })
    }
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
