//! Prefix reader trait
//!
//! Defines how the analysis obtains a file's leading bytes. The domain only
//! needs "up to N bytes from the start"; where they come from is up to the
//! implementation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of leading bytes read for signature comparison
pub const PREFIX_LEN: usize = 32;

/// Errors that can occur when reading a prefix
#[derive(Error, Debug)]
pub enum PrefixReadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Trait for reading the first bytes of a file
///
/// Implementations must return fewer than `limit` bytes when the file is
/// shorter, and an empty vector for an empty file.
pub trait PrefixReader: Send + Sync {
    /// Returns `path`'s regular-file status without reading it
    fn is_file(&self, path: &Path) -> bool;

    /// Reads at most `limit` bytes from the start of `path`
    fn read_prefix(&self, path: &Path, limit: usize) -> Result<Vec<u8>, PrefixReadError>;
}
