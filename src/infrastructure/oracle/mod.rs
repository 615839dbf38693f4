//! Type oracle implementations

mod file_command;

pub use file_command::{DEFAULT_FILE_PROGRAM, FileCommandOracle};
