//! Verdict entity
//!
//! The outcome of comparing a detected type against the file's extension.

use super::file_signature::FileType;
use serde::Serialize;
use std::fmt;

/// Why a verdict came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerdictReason {
    /// No signature matched, so nothing can be checked
    Unverifiable,
    /// A category rule matched and the extension is on its allow-list
    Verified,
    /// The detected type has no category rule; nothing is flagged
    NoRule,
    /// A category rule matched and the extension is not on its allow-list
    Mismatch {
        /// Extensions the rule would have accepted
        allowed: &'static [&'static str],
    },
}

impl fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictReason::Unverifiable => write!(f, "signature unknown, cannot verify."),
            VerdictReason::Verified => write!(f, "signature matches the extension."),
            VerdictReason::NoRule => write!(f, "no extension rule for this type."),
            VerdictReason::Mismatch { allowed } => {
                write!(f, "extension not in allowed set [{}].", allowed.join(" "))
            }
        }
    }
}

/// Result of evaluating one (type, extension) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    file_type: FileType,
    extension: String,
    reason: VerdictReason,
}

impl Verdict {
    /// Creates a new verdict
    pub fn new(file_type: FileType, extension: String, reason: VerdictReason) -> Self {
        Self {
            file_type,
            extension,
            reason,
        }
    }

    /// Returns the detected file type
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Returns the normalised extension (lowercase, leading dot, or empty)
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the reason
    pub fn reason(&self) -> VerdictReason {
        self.reason
    }

    /// True iff a category rule matched and rejected the extension
    pub fn mismatch(&self) -> bool {
        matches!(self.reason, VerdictReason::Mismatch { .. })
    }
}
