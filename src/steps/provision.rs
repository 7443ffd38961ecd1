//! Virtual environment creation and editable install.
//!
//! Both subprocesses run synchronously with inherited stdio, so their own
//! progress output reaches the terminal unchanged.

use crate::error::{BootstrapError, Result};
use crate::layout::TemplateLayout;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

#[cfg(windows)]
const INTERPRETER_CANDIDATES: &[&str] = &["python", "py"];
#[cfg(not(windows))]
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Interpreter inside a virtual environment.
///
/// `Scripts\python.exe` on Windows, `bin/python` elsewhere.
pub fn venv_python(venv_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_dir.join("Scripts").join("python.exe")
    } else {
        venv_dir.join("bin").join("python")
    }
}

/// Resolves the interpreter used to create the environment.
///
/// An explicit path wins; otherwise the first candidate found on `PATH`.
///
/// A relative explicit path is resolved against the current directory, not
/// the template root the subprocesses run in.
pub fn find_interpreter(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path = if path.components().count() > 1 || path.is_absolute() {
            std::path::absolute(path)?
        } else {
            // Bare name like `python3.12`: let `PATH` lookup handle it
            which::which(path).unwrap_or_else(|_| path.to_path_buf())
        };
        log::debug!("Using interpreter from --python: {}", path.display());
        return Ok(path);
    }

    for candidate in INTERPRETER_CANDIDATES {
        if let Ok(path) = which::which(candidate) {
            log::debug!("Found interpreter {}: {}", candidate, path.display());
            return Ok(path);
        }
    }

    Err(BootstrapError::InterpreterNotFound(
        INTERPRETER_CANDIDATES.join(", "),
    ))
}

/// Creates `.venv` unless it already exists.
///
/// Returns `true` if the environment was created.
///
/// # Errors
///
/// `VenvCreation` if the interpreter can't be spawned or exits non-zero.
pub fn ensure_venv(layout: &TemplateLayout, interpreter: &Path) -> Result<bool> {
    let venv_dir = layout.venv_dir();
    if venv_dir.exists() {
        log::info!("Virtual environment already present: {}", venv_dir.display());
        return Ok(false);
    }

    let status = Command::new(interpreter)
        .args(["-m", "venv"])
        .arg(&venv_dir)
        .current_dir(layout.root())
        .status()
        .map_err(|e| {
            BootstrapError::VenvCreation(format!(
                "could not run {}: {}",
                interpreter.display(),
                e
            ))
        })?;

    check_status(status, "venv").map_err(BootstrapError::VenvCreation)?;
    Ok(true)
}

/// Runs `pip install -e .` with the environment's interpreter in the root.
///
/// # Errors
///
/// `Install` if pip can't be spawned or exits non-zero.
pub fn install_editable(layout: &TemplateLayout) -> Result<()> {
    let python = venv_python(&layout.venv_dir());

    let status = Command::new(&python)
        .args(["-m", "pip", "install", "-e", "."])
        .current_dir(layout.root())
        .status()
        .map_err(|e| {
            BootstrapError::Install(format!("could not run {}: {}", python.display(), e))
        })?;

    check_status(status, "pip install").map_err(BootstrapError::Install)
}

fn check_status(status: ExitStatus, what: &str) -> std::result::Result<(), String> {
    if status.success() {
        return Ok(());
    }
    Err(match status.code() {
        Some(code) => format!("{} exited with status {}", what, code),
        None => format!("{} was terminated by a signal", what),
    })
}
