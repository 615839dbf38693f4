//! Analyze options DTO

use crate::domain::repositories::PREFIX_LEN;
use crate::infrastructure::oracle::DEFAULT_FILE_PROGRAM;

/// Options for analysing files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Leading bytes read per file
    pub prefix_len: usize,
    /// Whether to consult the external type oracle
    pub use_oracle: bool,
    /// Program run as the oracle
    pub oracle_program: String,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            prefix_len: PREFIX_LEN,
            use_oracle: true,
            oracle_program: DEFAULT_FILE_PROGRAM.to_string(),
        }
    }
}

impl AnalyzeOptions {
    /// Creates default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the external oracle
    pub fn without_oracle(mut self) -> Self {
        self.use_oracle = false;
        self
    }

    /// Sets the oracle program
    pub fn with_oracle_program(mut self, program: impl Into<String>) -> Self {
        self.oracle_program = program.into();
        self
    }
}
