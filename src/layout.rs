//! Template directory layout.
//!
//! Every path the bootstrap touches is derived here from one explicit root,
//! so the whole pipeline can run against any directory (tests use temp dirs).

use std::path::{Path, PathBuf};

/// Placeholder package name shipped with the template.
pub const PLACEHOLDER: &str = "sample";

/// Directory holding the package, relative to the root.
pub const SRC_DIR: &str = "src";

/// Virtual environment directory, relative to the root.
pub const VENV_DIR: &str = ".venv";

/// Version-control metadata directory, relative to the root.
pub const HISTORY_DIR: &str = ".git";

/// Root-level files that may mention the package name.
const ROOT_FILES: &[&str] = &["pyproject.toml", "README.md"];

/// Package files that may mention the package name.
const PACKAGE_FILES: &[&str] = &["__init__.py", "main.py", "utils.py"];

/// Paths of one template checkout for a given project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    root: PathBuf,
    old_package: PathBuf,
    new_package: PathBuf,
}

impl TemplateLayout {
    pub fn new(root: impl Into<PathBuf>, new_name: &str) -> Self {
        let root = root.into();
        let src = root.join(SRC_DIR);
        Self {
            old_package: src.join(PLACEHOLDER),
            new_package: src.join(new_name),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `src/sample`.
    pub fn old_package(&self) -> &Path {
        &self.old_package
    }

    /// `src/<name>`.
    pub fn new_package(&self) -> &Path {
        &self.new_package
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.root.join(VENV_DIR)
    }

    pub fn history_dir(&self) -> PathBuf {
        self.root.join(HISTORY_DIR)
    }

    /// Files patched after the rename, in patch order.
    ///
    /// Package files point into the *renamed* package.
    pub fn patch_targets(&self) -> Vec<PathBuf> {
        self.targets_in(&self.new_package)
    }

    /// Same files as [`patch_targets`](Self::patch_targets), but located in
    /// the placeholder package. Used to preview a rename that hasn't run.
    pub fn pending_patch_targets(&self) -> Vec<PathBuf> {
        self.targets_in(&self.old_package)
    }

    fn targets_in(&self, package: &Path) -> Vec<PathBuf> {
        ROOT_FILES
            .iter()
            .map(|f| self.root.join(f))
            .chain(PACKAGE_FILES.iter().map(|f| package.join(f)))
            .collect()
    }

    /// Formats `path` relative to the root with forward slashes.
    pub fn display(&self, path: &Path) -> String {
        let relative =
            pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    }
}
