//! Domain entities
//!
//! Core value types of the signature scanner.

mod file_signature;
mod scan_result;
mod verdict;

pub use file_signature::{FileType, SignatureEntry};
pub use scan_result::{OracleOutput, ScanResult};
pub use verdict::{Verdict, VerdictReason};
