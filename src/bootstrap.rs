//! Orchestration of a bootstrap run.
//!
//! Steps return `Result`s; this module decides which failures end the run
//! and which are only reported. Nothing here exits the process.

use crate::cli::BootstrapArgs;
use crate::error::{BootstrapError, Result};
use crate::layout::{PLACEHOLDER, TemplateLayout};
use crate::plan::{Plan, PlanOptions};
use crate::report;
use crate::steps::{
    HistoryOutcome, PatchOutcome, ensure_venv, find_interpreter, install_editable,
    patch_files, remove_history, rename_package,
};
use crate::verify::{ProjectName, preflight_checks, prompt_project_name, validate_project_name};

use std::io;
use std::path::PathBuf;

/// Executes a bootstrap run.
///
/// ## Phases
///
/// 1. Read the project name (argument or prompt) and validate it
/// 2. Resolve the template root and run pre-flight checks
/// 3. With `--dry-run`, print the plan and stop
/// 4. Otherwise run the pipeline
///
/// No file is touched before the name is validated.
pub fn execute(args: BootstrapArgs) -> Result<()> {
    let raw = match &args.name {
        Some(name) => name.clone(),
        None => prompt_project_name(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let name = validate_project_name(&raw)?;

    let root = resolve_root(args.root.clone())?;
    let layout = TemplateLayout::new(root, name.as_str());
    log::debug!("Template root: {}", layout.root().display());

    preflight_checks(&layout)?;

    if args.dry_run {
        let plan = Plan::build(&layout, name.as_str(), &plan_options(&args))?;
        plan.print_summary();
        return Ok(());
    }

    run(&layout, &name, &args)
}

/// Runs every step against `layout`.
///
/// Stops at the first fatal error without undoing earlier steps: a failed
/// install leaves the package renamed.
pub fn run(layout: &TemplateLayout, name: &ProjectName, args: &BootstrapArgs) -> Result<()> {
    // Resolve before the rename so a missing Python fails with the tree intact
    let interpreter = if args.skip_venv {
        None
    } else {
        Some(find_interpreter(args.python.as_deref())?)
    };

    report::status(
        "Renaming",
        format!(
            "{} → {}",
            layout.display(layout.old_package()),
            layout.display(layout.new_package())
        ),
    );
    rename_package(layout)?;

    let patch = patch_files(&layout.patch_targets(), PLACEHOLDER, name.as_str());
    for (path, outcome) in &patch.outcomes {
        if let PatchOutcome::Patched { replacements } = outcome {
            report::status(
                "Patched",
                format!(
                    "{} ({} occurrence{})",
                    layout.display(path),
                    replacements,
                    if *replacements == 1 { "" } else { "s" }
                ),
            );
        }
    }
    for err in &patch.errors {
        report::warn(err);
    }
    log::info!(
        "Replaced {} occurrence(s) in {} file(s)",
        patch.total_replacements(),
        patch.patched().count()
    );

    report::success(name.as_str());

    if let Some(interpreter) = interpreter {
        provision(layout, &interpreter)?;
    } else {
        report::note("Skipped", "virtual environment");
    }

    if args.keep_git {
        report::note("Kept", layout.display(&layout.history_dir()));
    } else {
        match remove_history(layout) {
            HistoryOutcome::Removed => {
                report::status("Removed", layout.display(&layout.history_dir()))
            }
            HistoryOutcome::Failed(err) => report::warn(&err),
            HistoryOutcome::Absent => {}
        }
    }

    report::finished();
    Ok(())
}

fn provision(layout: &TemplateLayout, interpreter: &std::path::Path) -> Result<()> {
    let venv = layout.display(&layout.venv_dir());

    if layout.venv_dir().exists() {
        report::note("Found", venv);
    } else {
        report::status("Creating", format!("{} with {}", venv, interpreter.display()));
    }
    ensure_venv(layout, interpreter)?;

    report::status("Installing", "project in editable mode");
    install_editable(layout)
}

fn plan_options(args: &BootstrapArgs) -> PlanOptions {
    PlanOptions {
        python: args.python.clone(),
        skip_venv: args.skip_venv,
        keep_git: args.keep_git,
    }
}

/// Absolute template root, without resolving symlinks or producing
/// Windows `\\?\` verbatim paths.
fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => std::path::absolute(path)?,
        None => std::env::current_dir()?,
    };

    match std::fs::metadata(&root) {
        Ok(meta) if meta.is_dir() => Ok(root),
        Ok(_) => Err(BootstrapError::Other(anyhow::anyhow!(
            "Template root {} is not accessible: not a directory",
            root.display()
        ))),
        Err(e) => Err(BootstrapError::Other(anyhow::anyhow!(
            "Template root {} is not accessible: {}",
            root.display(),
            e
        ))),
    }
}
