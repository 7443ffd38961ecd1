//! Binary entry point for `pyproject-bootstrap`.

use std::process;

fn main() {
    if let Err(e) = pyproject_bootstrap::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
