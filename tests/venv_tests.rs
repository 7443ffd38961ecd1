//! Environment provisioning against a fake interpreter.
//!
//! The fake understands `-m venv DIR` (copies itself to `DIR/bin/python`)
//! and `-m pip ...` (appends its working directory and arguments to
//! `$FAKE_PIP_LOG`). Kept to one test so no other test in this binary forks
//! while the script is being written.

#![cfg(unix)]

mod common;

use common::*;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const FAKE_PYTHON: &str = r#"#!/bin/sh
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    mkdir -p "$3/bin"
    cp "$0" "$3/bin/python"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    echo "$(pwd -P)|$*" >> "$FAKE_PIP_LOG"
    exit "${FAKE_PIP_EXIT:-0}"
fi
exit 2
"#;

fn write_fake_python(dir: &Path) -> PathBuf {
    let path = dir.join("fake-python");
    fs::write(&path, FAKE_PYTHON).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn run_with_python(
    root: &Path,
    python: &Path,
    log: &Path,
    pip_exit: &str,
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("pyproject-bootstrap");
    cmd.arg("--root")
        .arg(root)
        .arg("--python")
        .arg(python)
        .env("NO_COLOR", "1")
        .env("FAKE_PIP_LOG", log)
        .env("FAKE_PIP_EXIT", pip_exit)
        .write_stdin("myapp\n");
    cmd.assert()
}

#[test]
fn test_venv_and_editable_install() {
    let tools = tempfile::TempDir::new().unwrap();
    let python = write_fake_python(tools.path());
    let log = tools.path().join("pip.log");

    // Full run: venv created, install in the root, history removed
    let temp = create_template();
    let root = temp.path();

    run_with_python(root, &python, &log, "0")
        .success()
        .stdout(predicate::str::contains(
            "Project successfully renamed to 'myapp'.",
        ))
        .stdout(predicate::str::contains("Bootstrap complete"));

    assert!(root.join(".venv/bin/python").is_file());
    assert!(root.join("src/myapp/main.py").is_file());
    assert!(!root.join(".git").exists());

    let calls = fs::read_to_string(&log).unwrap();
    let expected = format!(
        "{}|-m pip install -e .\n",
        root.canonicalize().unwrap().display()
    );
    assert_eq!(calls, expected);

    // Install failure is fatal, but the rename stays
    let temp = create_template();
    let root = temp.path();

    run_with_python(root, &python, &log, "3")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to install project"))
        .stderr(predicate::str::contains("status 3"));

    assert!(root.join("src/myapp").is_dir());
    assert!(!root.join("src/sample").exists());
    // History removal comes after install, so it never ran
    assert!(root.join(".git").is_dir());

    // Existing .venv is reused, not recreated
    let temp = create_template();
    let root = temp.path();
    fs::create_dir_all(root.join(".venv/bin")).unwrap();
    fs::copy(&python, root.join(".venv/bin/python")).unwrap();
    fs::write(root.join(".venv/marker"), "keep").unwrap();

    run_with_python(root, &python, &log, "0").success();

    assert_eq!(fs::read_to_string(root.join(".venv/marker")).unwrap(), "keep");

    // Relative --python resolves against the caller's directory, not --root
    let temp = create_template();
    let root = temp.path();

    cargo_bin_cmd!("pyproject-bootstrap")
        .current_dir(tools.path())
        .arg("--root")
        .arg(root)
        .args(["--python", "./fake-python", "--name", "myapp"])
        .env("NO_COLOR", "1")
        .env("FAKE_PIP_LOG", &log)
        .env("FAKE_PIP_EXIT", "0")
        .assert()
        .success();

    assert!(root.join(".venv/bin/python").is_file());
    assert!(root.join("src/myapp").is_dir());

    // Broken interpreter: venv creation fails
    let temp = create_template();
    let root = temp.path();

    run_with_python(root, Path::new("/nonexistent/python3"), &log, "0")
        .failure()
        .stderr(predicate::str::contains("Failed to create virtual environment"));

    assert!(!root.join(".venv").exists());
}
