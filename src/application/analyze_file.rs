//! Analyze file use case
//!
//! Orchestrates one analysis: read the prefix, classify it, compare with the
//! extension and, optionally, ask the external oracle for a second opinion.

use crate::application::dto::AnalyzeOptions;
use crate::domain::entities::{OracleOutput, ScanResult};
use crate::domain::repositories::{PrefixReadError, PrefixReader, TypeOracle};
use crate::domain::services::{SignatureDatabase, VerdictEngine, extension_of};
use crate::infrastructure::oracle::FileCommandOracle;
use crate::infrastructure::prefix_reader::LocalPrefixReader;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Per-file failures that stop an analysis
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("File not found: {}", .0.display())]
    PathNotFound(PathBuf),
}

/// Analyze file use case
///
/// Holds no mutable state, so one instance can serve any number of
/// analyses, sequentially or in parallel.
pub struct AnalyzeFileUseCase {
    signatures: Arc<SignatureDatabase>,
    engine: Arc<VerdictEngine>,
    reader: Arc<dyn PrefixReader>,
    oracle: Option<Arc<dyn TypeOracle>>,
    prefix_len: usize,
}

impl AnalyzeFileUseCase {
    /// Creates a use case from explicit collaborators
    pub fn new(
        signatures: Arc<SignatureDatabase>,
        engine: Arc<VerdictEngine>,
        reader: Arc<dyn PrefixReader>,
        oracle: Option<Arc<dyn TypeOracle>>,
        prefix_len: usize,
    ) -> Self {
        Self {
            signatures,
            engine,
            reader,
            oracle,
            prefix_len,
        }
    }

    /// Creates a use case with the builtin tables, the local filesystem and
    /// the `file` oracle as configured in `options`
    pub fn from_options(options: &AnalyzeOptions) -> Self {
        let oracle: Option<Arc<dyn TypeOracle>> = if options.use_oracle {
            Some(Arc::new(FileCommandOracle::new(options.oracle_program.clone())))
        } else {
            None
        };

        Self::new(
            Arc::new(SignatureDatabase::builtin()),
            Arc::new(VerdictEngine::default()),
            Arc::new(LocalPrefixReader::new()),
            oracle,
            options.prefix_len,
        )
    }

    /// Returns the signature table in use
    pub fn signatures(&self) -> &SignatureDatabase {
        &self.signatures
    }

    /// Analyzes a single file
    ///
    /// A path that is not a regular file is an error. A prefix that cannot
    /// be read is not: the file is reported as Unknown with the read error
    /// attached.
    pub fn analyze(&self, path: &Path) -> Result<ScanResult, AnalyzeError> {
        if !self.reader.is_file(path) {
            return Err(AnalyzeError::PathNotFound(path.to_path_buf()));
        }

        let (prefix, read_error) = match self.reader.read_prefix(path, self.prefix_len) {
            Ok(prefix) => (prefix, None),
            Err(PrefixReadError::NotFound(p)) => return Err(AnalyzeError::PathNotFound(p)),
            Err(e) => {
                tracing::warn!("{}", e);
                (Vec::new(), Some(e.to_string()))
            }
        };

        let detected = self.signatures.classify(&prefix);
        let verdict = self.engine.evaluate(detected, &extension_of(path));

        tracing::info!(
            "{}: detected {} (extension '{}', mismatch: {})",
            path.display(),
            detected,
            verdict.extension(),
            verdict.mismatch()
        );

        let mut result = ScanResult::new(path.to_path_buf(), &prefix, verdict);

        if let Some(message) = read_error {
            result = result.with_read_error(message);
        }

        if let Some(oracle) = &self.oracle {
            let output = match oracle.describe(path) {
                Ok(text) => OracleOutput::Output(text),
                Err(e) => {
                    tracing::warn!("type oracle failed for {}: {}", path.display(), e);
                    OracleOutput::Error(e.to_string())
                }
            };
            result = result.with_oracle(output);
        }

        Ok(result)
    }

    /// Analyzes many files in parallel, returning results in input order
    pub fn analyze_many(&self, paths: &[PathBuf]) -> Vec<Result<ScanResult, AnalyzeError>> {
        paths.par_iter().map(|path| self.analyze(path)).collect()
    }
}
