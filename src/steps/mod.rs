//! The individual bootstrap steps, in pipeline order.

pub mod history;
pub mod patch;
pub mod provision;
pub mod rename;

pub use history::{HistoryOutcome, remove_history};
pub use patch::{PatchOutcome, PatchReport, patch_file, patch_files};
pub use provision::{ensure_venv, find_interpreter, install_editable, venv_python};
pub use rename::rename_package;
