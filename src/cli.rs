use clap::Parser;
use std::path::PathBuf;

/// Turn a cloned Python template into a named project.
///
/// Renames `src/sample` to `src/<NAME>`, patches references in
/// `pyproject.toml`, `README.md` and the package files, creates `.venv`,
/// installs the project in editable mode and removes `.git`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pyproject-bootstrap", version, verbatim_doc_comment)]
pub struct BootstrapArgs {
    /// Template root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// New project name; prompts on stdin when omitted
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Python interpreter used to create the virtual environment
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Don't create .venv or install the project
    #[arg(long)]
    pub skip_venv: bool,

    /// Keep the .git directory
    #[arg(long)]
    pub keep_git: bool,

    /// Preview changes without applying them
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Print debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
