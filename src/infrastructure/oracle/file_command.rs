//! `file(1)` oracle
//!
//! Shells out to the system `file` utility and returns its one-line
//! description. Failure is always soft: the caller turns it into a message.

use crate::domain::repositories::{OracleError, TypeOracle};
use std::io;
use std::path::Path;
use std::process::Command;

/// Program invoked when no other is configured
pub const DEFAULT_FILE_PROGRAM: &str = "file";

/// Type oracle that runs an external `file`-compatible program
#[derive(Debug, Clone)]
pub struct FileCommandOracle {
    program: String,
}

impl FileCommandOracle {
    /// Creates an oracle running `program <path>`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the program name
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for FileCommandOracle {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PROGRAM)
    }
}

impl TypeOracle for FileCommandOracle {
    fn describe(&self, path: &Path) -> Result<String, OracleError> {
        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => OracleError::Unavailable {
                    program: self.program.clone(),
                },
                _ => OracleError::Io(e),
            })?;

        // stdout and stderr are reported together, like `2>&1`
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        let text = text.trim().to_string();

        if !output.status.success() {
            return Err(OracleError::Failed {
                program: self.program.clone(),
                status: output.status,
                output: text,
            });
        }

        Ok(text)
    }
}
