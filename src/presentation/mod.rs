//! Presentation layer
//!
//! Command line, prompt and report output.

pub mod cli;
