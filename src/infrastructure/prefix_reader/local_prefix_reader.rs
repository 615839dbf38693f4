//! Local filesystem prefix reader
//!
//! Reads the leading bytes of regular files with plain std I/O.

use crate::domain::repositories::{PrefixReadError, PrefixReader};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Prefix reader backed by the local filesystem
///
/// # Example
///
/// ```ignore
/// let reader = LocalPrefixReader::new();
/// let header = reader.read_prefix(Path::new("photo.jpg"), 32)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPrefixReader;

impl LocalPrefixReader {
    /// Creates a new reader
    pub fn new() -> Self {
        Self
    }
}

impl PrefixReader for LocalPrefixReader {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_prefix(&self, path: &Path, limit: usize) -> Result<Vec<u8>, PrefixReadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PrefixReadError::NotFound(path.to_path_buf()),
            _ => PrefixReadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        // `take` + `read_to_end` keeps reading across short reads until the
        // limit or EOF, whichever comes first.
        let mut buffer = Vec::with_capacity(limit);
        file.take(limit as u64)
            .read_to_end(&mut buffer)
            .map_err(|source| PrefixReadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("read {} prefix bytes from {}", buffer.len(), path.display());

        Ok(buffer)
    }
}
