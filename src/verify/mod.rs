//! Input validation and pre-flight checks.

pub mod preflight;
pub mod prompt;
pub mod rules;

pub use preflight::preflight_checks;
pub use prompt::prompt_project_name;
pub use rules::{ProjectName, validate_project_name};
