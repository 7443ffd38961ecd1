//! Directory moves.
//!
//! Uses `rename()` when source and target share a file system, otherwise
//! falls back to copy + delete.

use std::fs;
use std::io;
use std::path::Path;

/// Moves the directory `from` to `to`.
///
/// `to` must not exist; its parent is created if needed.
pub fn move_dir(from: &Path, to: &Path) -> io::Result<()> {
    if to.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }

    if is_same_filesystem(from, to)? {
        match fs::rename(from, to) {
            Ok(()) => return Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                log::debug!("rename crossed devices, copying instead");
            }
            Err(e) => return Err(e),
        }
    }

    copy_then_remove(from, to)
}

/// Cross-filesystem move. A failed copy removes the partial target so the
/// next attempt doesn't trip over it.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    if let Err(e) = copy_dir_recursive(from, to) {
        if let Err(cleanup) = fs::remove_dir_all(to) {
            log::warn!("Failed to clean up {}: {}", to.display(), cleanup);
        }
        return Err(e);
    }
    fs::remove_dir_all(from)
}

/// Checks if paths are on same filesystem.
///
/// Determines if atomic `rename()` is possible, or if cross-filesystem
/// copy+delete is required.
fn is_same_filesystem(path1: &Path, path2: &Path) -> io::Result<bool> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let meta1 = fs::metadata(path1)?;
        let meta2_parent = path2.parent().unwrap_or(path2);
        let meta2 = fs::metadata(meta2_parent)?;
        Ok(meta1.dev() == meta2.dev())
    }

    #[cfg(not(unix))]
    {
        let path1_str = path1.to_string_lossy();
        let path2_str = path2.to_string_lossy();

        if path1_str.len() >= 2 && path2_str.len() >= 2 {
            Ok(path1_str.chars().next() == path2_str.chars().next())
        } else {
            Ok(true)
        }
    }
}

/// Recursively copies directory tree.
fn copy_dir_recursive(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let from_path = entry.path();
        let to_path = to.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&from_path, &to_path)?;
        } else {
            fs::copy(&from_path, &to_path)?;
        }
    }

    Ok(())
}
