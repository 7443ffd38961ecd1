//! Read-only preview of a bootstrap run.
//!
//! `Plan::build` inspects the template and records every change a real run
//! would make, without touching the file system. Used by `--dry-run`.
//!
//! ## Example
//!
//! ```no_run
//! # use pyproject_bootstrap::layout::TemplateLayout;
//! # use pyproject_bootstrap::plan::{Plan, PlanOptions};
//! # fn example() -> pyproject_bootstrap::error::Result<()> {
//! let layout = TemplateLayout::new("/work/template", "myapp");
//! let plan = Plan::build(&layout, "myapp", &PlanOptions::default())?;
//!
//! for line in plan.preview() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::layout::{PLACEHOLDER, TemplateLayout};
use crate::steps::patch::replace_literal;
use crate::steps::provision::find_interpreter;
use crate::verify::preflight_checks;

use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// A change a bootstrap run would make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Rename the package directory.
    MoveDirectory { from: PathBuf, to: PathBuf },
    /// Rewrite a file.
    ///
    /// `path` is where the file ends up after the move.
    PatchFile { path: PathBuf, replacements: usize },
    /// Create `.venv`. `interpreter` is `None` if none could be found.
    CreateVenv {
        path: PathBuf,
        interpreter: Option<PathBuf>,
    },
    /// `pip install -e .` in the root.
    Install { root: PathBuf },
    /// Delete `.git`.
    RemoveHistory { path: PathBuf },
}

/// Which optional steps a run includes.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub python: Option<PathBuf>,
    pub skip_venv: bool,
    pub keep_git: bool,
}

/// Statistics about planned operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanStats {
    pub files_patched: usize,
    pub replacements: usize,
    pub commands: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct Plan {
    operations: Vec<Operation>,
    layout: TemplateLayout,
    /// Patch targets that exist but could not be read.
    unreadable: Vec<(PathBuf, String)>,
}

impl Plan {
    /// Computes the plan for renaming the placeholder package to `new_name`.
    ///
    /// # Errors
    ///
    /// The same pre-flight errors a real run would hit first
    /// (`MissingSource`, `TargetExists`).
    pub fn build(layout: &TemplateLayout, new_name: &str, options: &PlanOptions) -> Result<Self> {
        preflight_checks(layout)?;

        let mut plan = Self {
            operations: Vec::new(),
            layout: layout.clone(),
            unreadable: Vec::new(),
        };

        plan.operations.push(Operation::MoveDirectory {
            from: layout.old_package().to_path_buf(),
            to: layout.new_package().to_path_buf(),
        });

        // Read from where the files are now, report where they will be
        for (current, target) in layout
            .pending_patch_targets()
            .into_iter()
            .zip(layout.patch_targets())
        {
            if !current.is_file() {
                continue;
            }
            match fs::read_to_string(&current) {
                Ok(text) => {
                    if let Some((_, replacements)) = replace_literal(&text, PLACEHOLDER, new_name) {
                        plan.operations.push(Operation::PatchFile {
                            path: target,
                            replacements,
                        });
                    }
                }
                Err(e) => plan.unreadable.push((target, e.to_string())),
            }
        }

        if !options.skip_venv {
            let venv = layout.venv_dir();
            if !venv.exists() {
                plan.operations.push(Operation::CreateVenv {
                    path: venv,
                    interpreter: find_interpreter(options.python.as_deref()).ok(),
                });
            }
            plan.operations.push(Operation::Install {
                root: layout.root().to_path_buf(),
            });
        }

        if !options.keep_git && layout.history_dir().is_dir() {
            plan.operations.push(Operation::RemoveHistory {
                path: layout.history_dir(),
            });
        }

        Ok(plan)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    fn display(&self, path: &std::path::Path) -> String {
        self.layout.display(path)
    }

    /// Returns human-readable preview of operations.
    pub fn preview(&self) -> Vec<String> {
        self.operations
            .iter()
            .map(|op| match op {
                Operation::MoveDirectory { from, to } => {
                    format!("Move: {} → {}", self.display(from), self.display(to))
                }
                Operation::PatchFile { path, replacements } => format!(
                    "Patch: {} ({} occurrence{})",
                    self.display(path),
                    replacements,
                    if *replacements == 1 { "" } else { "s" }
                ),
                Operation::CreateVenv { path, interpreter } => match interpreter {
                    Some(python) => format!(
                        "Create venv: {} with {}",
                        self.display(path),
                        python.display()
                    ),
                    None => format!("Create venv: {} (no interpreter found)", self.display(path)),
                },
                Operation::Install { root } => {
                    format!("Install: pip install -e . in {}", root.display())
                }
                Operation::RemoveHistory { path } => format!("Remove: {}", self.display(path)),
            })
            .collect()
    }

    /// Returns operation statistics.
    pub fn stats(&self) -> PlanStats {
        let mut stats = PlanStats {
            total: self.operations.len(),
            ..PlanStats::default()
        };

        for op in &self.operations {
            match op {
                Operation::PatchFile { replacements, .. } => {
                    stats.files_patched += 1;
                    stats.replacements += replacements;
                }
                Operation::CreateVenv { .. } | Operation::Install { .. } => stats.commands += 1,
                Operation::MoveDirectory { .. } | Operation::RemoveHistory { .. } => {}
            }
        }

        stats
    }

    /// Prints the plan to stdout.
    pub fn print_summary(&self) {
        println!("\n{}", "DRY RUN - No changes will be made".yellow().bold());
        println!();

        for line in self.preview() {
            println!("   • {}", line.dimmed());
        }

        for (path, reason) in &self.unreadable {
            eprintln!(
                "{} {} would be skipped: {}",
                "warning:".yellow().bold(),
                self.display(path),
                reason
            );
        }

        let stats = self.stats();
        println!();
        println!(
            "{} file{} with {} replacement{}, {} command{}. Run without {} to apply.",
            stats.files_patched.to_string().cyan().bold(),
            if stats.files_patched == 1 { "" } else { "s" },
            stats.replacements,
            if stats.replacements == 1 { "" } else { "s" },
            stats.commands,
            if stats.commands == 1 { "" } else { "s" },
            "--dry-run".cyan()
        );
    }
}
