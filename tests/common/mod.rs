//! Shared fixtures for pyproject-bootstrap integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PYPROJECT: &str = r#"[project]
name = "sample"
version = "0.1.0"

[project.scripts]
sample = "sample.main:main"
"#;

/// Creates a template checkout with the placeholder package and a `.git` dir.
#[allow(unused)]
pub fn create_template() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("pyproject.toml"), PYPROJECT).unwrap();
    fs::write(
        root.join("README.md"),
        "# sample\n\nRun `python -m sample.main`.\n",
    )
    .unwrap();

    let pkg = root.join("src/sample");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "\"\"\"The sample package.\"\"\"\n").unwrap();
    fs::write(
        pkg.join("main.py"),
        "from sample.utils import greet\n\n\ndef main():\n    print(greet())\n",
    )
    .unwrap();
    fs::write(
        pkg.join("utils.py"),
        "def greet():\n    return \"hello from sample\"\n",
    )
    .unwrap();

    let git = root.join(".git");
    fs::create_dir_all(git.join("objects")).unwrap();
    fs::write(git.join("HEAD"), "ref: refs/heads/main\n").unwrap();

    temp
}

/// Runs the binary against `root`, feeding `input` on stdin.
#[allow(unused)]
pub fn run_bootstrap(root: &Path, input: &str, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("pyproject-bootstrap");
    cmd.arg("--root")
        .arg(root)
        .args(extra_args)
        .env("NO_COLOR", "1")
        .write_stdin(input);

    cmd.assert()
}

/// Runs the binary without creating a virtual environment.
#[allow(unused)]
pub fn run_offline(root: &Path, input: &str) -> assert_cmd::assert::Assert {
    run_bootstrap(root, input, &["--skip-venv"])
}

/// Sorted file names directly under `dir`.
#[allow(unused)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Every file under `root` with its bytes, for before/after comparisons.
#[allow(unused)]
pub fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<(String, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                out.push((rel(&path, root), Vec::new()));
                walk(&path, root, out);
            } else {
                out.push((rel(&path, root), fs::read(&path).unwrap()));
            }
        }
    }
    fn rel(path: &Path, root: &Path) -> String {
        path.strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/")
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
