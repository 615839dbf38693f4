//! Process exit codes for non-interactive use

use crate::application::AnalyzeError;
use crate::domain::entities::ScanResult;

/// Every file analysed and no mismatch found
pub const EXIT_OK: u8 = 0;
/// At least one extension mismatch
pub const EXIT_MISMATCH: u8 = 1;
/// At least one file could not be analysed, or bad usage
pub const EXIT_ERROR: u8 = 2;
/// Interrupted by Ctrl-C
pub const EXIT_INTERRUPTED: u8 = 130;

/// Folds per-file outcomes into one exit code. Errors outrank mismatches.
pub fn exit_code_for(outcomes: &[Result<ScanResult, AnalyzeError>]) -> u8 {
    let errored = outcomes
        .iter()
        .any(|outcome| outcome.as_ref().map_or(true, ScanResult::has_errors));

    if errored {
        EXIT_ERROR
    } else if outcomes.iter().flatten().any(ScanResult::mismatch) {
        EXIT_MISMATCH
    } else {
        EXIT_OK
    }
}
