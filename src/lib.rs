//! Magic number scanner
//!
//! Identifies a file's content type from its leading bytes and flags a
//! mismatch with its extension.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{AnalyzeError, AnalyzeFileUseCase};
pub use domain::entities::{FileType, ScanResult, Verdict, VerdictReason};
pub use domain::services::{SignatureDatabase, VerdictEngine};
