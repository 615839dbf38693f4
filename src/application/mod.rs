//! Application layer
//!
//! Use cases that wire the domain services to their collaborators.

mod analyze_file;
pub mod dto;

pub use analyze_file::{AnalyzeError, AnalyzeFileUseCase};
