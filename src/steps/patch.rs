//! Literal text replacement in a fixed list of files.
//!
//! This is a plain substring replace: no word boundaries, no TOML or Python
//! awareness. An old token that appears inside an unrelated word is replaced
//! too.
//!
//! Failures on a single file are collected, not returned, so one unreadable
//! file never stops the remaining ones from being patched.

use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of patching one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Path missing or not a regular file.
    Skipped,
    /// No occurrences; file not rewritten.
    Unchanged,
    /// File rewritten with `replacements` occurrences replaced.
    Patched { replacements: usize },
}

/// Per-file results of [`patch_files`].
#[derive(Debug, Default)]
pub struct PatchReport {
    pub outcomes: Vec<(PathBuf, PatchOutcome)>,
    pub errors: Vec<BootstrapError>,
}

impl PatchReport {
    /// Paths that were actually rewritten.
    pub fn patched(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, PatchOutcome::Patched { .. }))
            .map(|(p, _)| p.as_path())
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes
            .iter()
            .map(|(_, o)| match o {
                PatchOutcome::Patched { replacements } => *replacements,
                _ => 0,
            })
            .sum()
    }
}

/// Replaces every occurrence of `old` with `new` in `text`.
///
/// Returns `None` when `text` has no occurrence.
pub fn replace_literal(text: &str, old: &str, new: &str) -> Option<(String, usize)> {
    if old.is_empty() {
        return None;
    }
    let count = text.matches(old).count();
    if count == 0 {
        return None;
    }
    Some((text.replace(old, new), count))
}

/// Patches a single file in place.
///
/// Writes only when the content changes, so untouched files keep their
/// timestamps.
///
/// # Errors
///
/// `Patch` if the file cannot be read as UTF-8 or cannot be written.
pub fn patch_file(path: &Path, old: &str, new: &str) -> Result<PatchOutcome> {
    if !path.is_file() {
        log::debug!("Not a file, skipping: {}", path.display());
        return Ok(PatchOutcome::Skipped);
    }

    let patch_err = |source| BootstrapError::Patch {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(patch_err)?;

    let Some((updated, replacements)) = replace_literal(&content, old, new) else {
        log::debug!("Content unchanged, skipping: {}", path.display());
        return Ok(PatchOutcome::Unchanged);
    };

    fs::write(path, updated).map_err(patch_err)?;
    log::debug!("Updated: {} ({} replacements)", path.display(), replacements);

    Ok(PatchOutcome::Patched { replacements })
}

/// Patches each path in order, collecting failures instead of stopping.
pub fn patch_files<P: AsRef<Path>>(paths: &[P], old: &str, new: &str) -> PatchReport {
    let mut report = PatchReport::default();

    for path in paths {
        let path = path.as_ref();
        match patch_file(path, old, new) {
            Ok(outcome) => report.outcomes.push((path.to_path_buf(), outcome)),
            Err(e) => {
                log::debug!("Patch failed: {}", e);
                report.errors.push(e);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_replace_literal() {
        assert_eq!(
            replace_literal("from sample import x  # sample", "sample", "myapp"),
            Some(("from myapp import x  # myapp".to_string(), 2))
        );
        assert_eq!(replace_literal("nothing here", "sample", "myapp"), None);
        assert_eq!(replace_literal("text", "", "myapp"), None);
    }

    #[test]
    fn test_replace_is_not_word_aware() {
        let (out, n) = replace_literal("resample", "sample", "myapp").unwrap();
        assert_eq!(out, "remyapp");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_patch_file_replaces_all() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("pyproject.toml");
        fs::write(&file, "[project]\nname = \"sample\"\n# sample docs\n").unwrap();

        let outcome = patch_file(&file, "sample", "myapp").unwrap();

        assert_eq!(outcome, PatchOutcome::Patched { replacements: 2 });
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "[project]\nname = \"myapp\"\n# myapp docs\n"
        );
    }

    #[test]
    fn test_patch_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("main.py");
        fs::write(&file, "import sample\n").unwrap();

        patch_file(&file, "sample", "myapp").unwrap();
        let once = fs::read(&file).unwrap();
        let second = patch_file(&file, "sample", "myapp").unwrap();

        assert_eq!(second, PatchOutcome::Unchanged);
        assert_eq!(fs::read(&file).unwrap(), once);
    }

    #[test]
    fn test_unchanged_file_not_rewritten() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "# Template\n").unwrap();
        let before = fs::metadata(&file).unwrap().modified().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(20));
        let outcome = patch_file(&file, "sample", "myapp").unwrap();

        assert_eq!(outcome, PatchOutcome::Unchanged);
        assert_eq!(fs::metadata(&file).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_missing_and_directory_skipped() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("utils.py");
        fs::create_dir(&dir).unwrap();

        assert_eq!(
            patch_file(&temp.path().join("missing.py"), "sample", "myapp").unwrap(),
            PatchOutcome::Skipped
        );
        assert_eq!(
            patch_file(&dir, "sample", "myapp").unwrap(),
            PatchOutcome::Skipped
        );
    }

    #[test]
    fn test_bad_file_does_not_stop_others() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("README.md");
        let good = temp.path().join("main.py");
        fs::write(&bad, [0xff, 0xfe, 0x00, b's']).unwrap();
        fs::write(&good, "import sample\n").unwrap();

        let report = patch_files(
            &[bad.clone(), temp.path().join("missing.py"), good.clone()],
            "sample",
            "myapp",
        );

        assert_eq!(report.errors.len(), 1);
        assert!(matches!(report.errors[0], BootstrapError::Patch { .. }));
        assert_eq!(report.patched().collect::<Vec<_>>(), vec![good.as_path()]);
        assert_eq!(report.total_replacements(), 1);
        assert_eq!(fs::read(&bad).unwrap(), [0xff, 0xfe, 0x00, b's']);
    }
}
