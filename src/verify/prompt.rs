//! Interactive project-name prompt.
//!
//! Reads exactly one line. There is no retry loop: a bad answer is reported
//! by validation and ends the run.

use crate::error::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter the new project name (valid Python identifier):";

/// Prompts on `output` and reads one line from `input`.
///
/// Returns the line with surrounding whitespace stripped. End of input
/// yields an empty string, which validation rejects.
///
/// # Errors
///
/// Returns `Err` only on I/O errors.
pub fn prompt_project_name<R, W>(input: &mut R, output: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} ", PROMPT.bold())?;
    output.flush()?;

    let mut response = String::new();
    let read = input.read_line(&mut response)?;
    if read == 0 {
        log::debug!("End of input before a project name was entered");
    }

    Ok(response.trim().to_string())
}
