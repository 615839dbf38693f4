//! Scan result entity
//!
//! Everything gathered about one file in one analysis. A result is built
//! fresh per file and handed to the caller for display.

use super::file_signature::FileType;
use super::verdict::Verdict;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::path::{Path, PathBuf};

/// What the external type-detection tool said, if it was consulted
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum OracleOutput {
    /// The tool ran and produced this description
    Output(String),
    /// The tool was missing or failed; the message is shown inline
    Error(String),
}

impl OracleOutput {
    /// Returns the text to display, whichever variant this is
    pub fn text(&self) -> &str {
        match self {
            OracleOutput::Output(text) | OracleOutput::Error(text) => text,
        }
    }
}

/// Result of analysing a single file
///
/// Serialises with the headline fields (`extension`, `mismatch` and the
/// verdict's `reason` text) at the top level next to the full `verdict`.
#[derive(Debug, Clone)]
pub struct ScanResult {
    path: PathBuf,
    raw_prefix_hex: String,
    detected_label: &'static str,
    verdict: Verdict,
    oracle: Option<OracleOutput>,
    read_error: Option<String>,
}

impl ScanResult {
    /// Creates a new scan result from the raw prefix and the verdict
    pub fn new(path: PathBuf, prefix: &[u8], verdict: Verdict) -> Self {
        Self {
            path,
            raw_prefix_hex: hex::encode(prefix),
            detected_label: verdict.file_type().name(),
            verdict,
            oracle: None,
            read_error: None,
        }
    }

    /// Attaches the external tool's output
    pub fn with_oracle(mut self, oracle: OracleOutput) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Records that the prefix could not be read
    pub fn with_read_error(mut self, message: String) -> Self {
        self.read_error = Some(message);
        self
    }

    /// Returns the analysed path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the leading bytes as lowercase hex
    pub fn raw_prefix_hex(&self) -> &str {
        &self.raw_prefix_hex
    }

    /// Decodes the stored hex back into bytes
    pub fn prefix_bytes(&self) -> Vec<u8> {
        // The string is only ever produced by hex::encode
        hex::decode(&self.raw_prefix_hex).unwrap_or_default()
    }

    /// Returns the detected type
    pub fn detected(&self) -> FileType {
        self.verdict.file_type()
    }

    /// Returns the detected type's label
    pub fn detected_label(&self) -> &'static str {
        self.detected_label
    }

    /// Returns the normalised extension
    pub fn extension(&self) -> &str {
        self.verdict.extension()
    }

    /// Returns the verdict
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns true if the extension contradicts the header
    pub fn mismatch(&self) -> bool {
        self.verdict.mismatch()
    }

    /// Returns the external tool's output, if it was consulted
    pub fn oracle(&self) -> Option<&OracleOutput> {
        self.oracle.as_ref()
    }

    /// Returns the read failure, if the prefix could not be read
    pub fn read_error(&self) -> Option<&str> {
        self.read_error.as_deref()
    }

    /// Returns whether this result should count as a per-file error
    pub fn has_errors(&self) -> bool {
        self.read_error.is_some()
    }
}

impl Serialize for ScanResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScanResult", 9)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("raw_prefix_hex", &self.raw_prefix_hex)?;
        state.serialize_field("detected_label", self.detected_label)?;
        state.serialize_field("extension", self.extension())?;
        state.serialize_field("mismatch", &self.mismatch())?;
        state.serialize_field("reason", &self.verdict.reason().to_string())?;
        state.serialize_field("verdict", &self.verdict)?;
        state.serialize_field("oracle", &self.oracle)?;
        state.serialize_field("read_error", &self.read_error)?;
        state.end()
    }
}
