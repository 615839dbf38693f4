//! External type oracle trait
//!
//! A second opinion on a file's type from a general-purpose tool. Its text
//! is shown next to the verdict and never feeds into it.

use std::io;
use std::path::Path;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur when consulting the oracle
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Command '{program}' not found (Are you on Windows?)")]
    Unavailable { program: String },

    #[error("Error: '{program}' exited with {status}: {output}")]
    Failed {
        program: String,
        status: ExitStatus,
        output: String,
    },

    #[error("Error: {0}")]
    Io(#[from] io::Error),
}

/// Trait for an advisory file-type description source
pub trait TypeOracle: Send + Sync {
    /// Describes the file at `path` in free-form text
    fn describe(&self, path: &Path) -> Result<String, OracleError>;
}
