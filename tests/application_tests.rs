//! Application layer tests
//!
//! Drives the analysis use case with in-memory collaborators, plus a few
//! runs against real temporary files.

use magic_scan::application::dto::AnalyzeOptions;
use magic_scan::application::{AnalyzeError, AnalyzeFileUseCase};
use magic_scan::domain::entities::{FileType, OracleOutput, VerdictReason};
use magic_scan::domain::repositories::{
    OracleError, PREFIX_LEN, PrefixReadError, PrefixReader, TypeOracle,
};
use magic_scan::domain::services::{SignatureDatabase, VerdictEngine};
use rstest::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// In-memory files; `None` content simulates an unreadable file
#[derive(Default)]
struct FakeReader {
    files: HashMap<PathBuf, Option<Vec<u8>>>,
}

impl FakeReader {
    fn with(mut self, path: &str, header: &str) -> Self {
        self.files
            .insert(PathBuf::from(path), Some(hex::decode(header).unwrap()));
        self
    }

    fn unreadable(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), None);
        self
    }
}

impl PrefixReader for FakeReader {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_prefix(&self, path: &Path, limit: usize) -> Result<Vec<u8>, PrefixReadError> {
        match self.files.get(path) {
            Some(Some(data)) => Ok(data.iter().take(limit).copied().collect()),
            Some(None) => Err(PrefixReadError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            }),
            None => Err(PrefixReadError::NotFound(path.to_path_buf())),
        }
    }
}

/// Oracle that always answers the same thing
struct FixedOracle {
    available: bool,
    text: &'static str,
}

impl TypeOracle for FixedOracle {
    fn describe(&self, _path: &Path) -> Result<String, OracleError> {
        if self.available {
            Ok(self.text.to_string())
        } else {
            Err(OracleError::Unavailable {
                program: "file".to_string(),
            })
        }
    }
}

fn use_case(reader: FakeReader, oracle: Option<FixedOracle>) -> AnalyzeFileUseCase {
    AnalyzeFileUseCase::new(
        Arc::new(SignatureDatabase::builtin()),
        Arc::new(VerdictEngine::default()),
        Arc::new(reader),
        oracle.map(|o| Arc::new(o) as Arc<dyn TypeOracle>),
        PREFIX_LEN,
    )
}

#[fixture]
fn scenarios() -> AnalyzeFileUseCase {
    let reader = FakeReader::default()
        .with("holiday.jpg", "FFD8FFE000104A464946")
        .with("invoice.txt", "4D5A9000")
        .with("report.docx", "504B0304")
        .with("noise.dat", "0102030405")
        .with("logo.png", "89504E470D0A1A0A")
        .with("movie.mkv", "1A45DFA3");
    use_case(reader, None)
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[rstest]
#[case("holiday.jpg", FileType::Jpeg, ".jpg", false)]
#[case("invoice.txt", FileType::WindowsExecutable, ".txt", true)]
#[case("report.docx", FileType::Zip, ".docx", false)]
#[case("noise.dat", FileType::Unknown, ".dat", false)]
#[case("logo.png", FileType::Png, ".png", false)]
#[case("movie.mkv", FileType::Matroska, ".mkv", false)]
fn test_scenarios(
    scenarios: AnalyzeFileUseCase,
    #[case] path: &str,
    #[case] detected: FileType,
    #[case] extension: &str,
    #[case] mismatch: bool,
) {
    let result = scenarios.analyze(Path::new(path)).unwrap();
    assert_eq!(result.detected(), detected);
    assert_eq!(result.extension(), extension);
    assert_eq!(result.mismatch(), mismatch);
    assert!(result.oracle().is_none());
}

#[rstest]
fn test_executable_label_and_hex(scenarios: AnalyzeFileUseCase) {
    let result = scenarios.analyze(Path::new("invoice.txt")).unwrap();
    assert_eq!(result.detected_label(), "Windows Executable");
    assert_eq!(result.raw_prefix_hex(), "4d5a9000");
}

#[rstest]
fn test_mkv_has_no_rule(scenarios: AnalyzeFileUseCase) {
    let result = scenarios.analyze(Path::new("movie.mkv")).unwrap();
    assert_eq!(result.verdict().reason(), VerdictReason::NoRule);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[rstest]
fn test_missing_path_is_an_error(scenarios: AnalyzeFileUseCase) {
    match scenarios.analyze(Path::new("nope.exe")) {
        Err(AnalyzeError::PathNotFound(p)) => assert_eq!(p, PathBuf::from("nope.exe")),
        other => panic!("expected PathNotFound, got {:?}", other),
    }
}

#[rstest]
fn test_unreadable_file_falls_back_to_unknown() {
    let uc = use_case(FakeReader::default().unreadable("locked.exe"), None);

    let result = uc.analyze(Path::new("locked.exe")).unwrap();
    assert_eq!(result.detected(), FileType::Unknown);
    assert_eq!(result.raw_prefix_hex(), "");
    assert!(!result.mismatch());
    assert!(result.has_errors());
    assert!(result.read_error().unwrap().contains("permission denied"));
}

#[rstest]
fn test_prefix_is_capped_at_limit() {
    let long_header = "FFD8FF".to_string() + &"AB".repeat(60);
    let uc = use_case(FakeReader::default().with("big.jpg", &long_header), None);

    let result = uc.analyze(Path::new("big.jpg")).unwrap();
    assert_eq!(result.prefix_bytes().len(), PREFIX_LEN);
    assert_eq!(result.raw_prefix_hex().len(), PREFIX_LEN * 2);
}

// ============================================================================
// Oracle Tests
// ============================================================================

#[rstest]
fn test_oracle_output_is_attached_but_ignored() {
    let reader = FakeReader::default().with("invoice.txt", "4D5A9000");
    let oracle = FixedOracle {
        available: true,
        text: "invoice.txt: ASCII text",
    };
    let uc = use_case(reader, Some(oracle));

    let result = uc.analyze(Path::new("invoice.txt")).unwrap();
    assert!(result.mismatch());
    assert_eq!(
        result.oracle(),
        Some(&OracleOutput::Output("invoice.txt: ASCII text".to_string()))
    );
}

#[rstest]
fn test_missing_oracle_is_a_soft_error() {
    let reader = FakeReader::default().with("holiday.jpg", "FFD8FFE0");
    let oracle = FixedOracle {
        available: false,
        text: "",
    };
    let uc = use_case(reader, Some(oracle));

    let result = uc.analyze(Path::new("holiday.jpg")).unwrap();
    assert!(!result.mismatch());
    assert!(!result.has_errors());
    assert_eq!(
        result.oracle(),
        Some(&OracleOutput::Error(
            "Command 'file' not found (Are you on Windows?)".to_string()
        ))
    );
}

// ============================================================================
// Batch Tests
// ============================================================================

#[rstest]
fn test_analyze_many_keeps_input_order(scenarios: AnalyzeFileUseCase) {
    let paths: Vec<PathBuf> = ["logo.png", "missing.bin", "invoice.txt", "holiday.jpg"]
        .iter()
        .map(PathBuf::from)
        .collect();

    let outcomes = scenarios.analyze_many(&paths);

    assert_eq!(outcomes.len(), 4);
    assert_eq!(outcomes[0].as_ref().unwrap().detected(), FileType::Png);
    assert!(outcomes[1].is_err());
    assert_eq!(
        outcomes[2].as_ref().unwrap().detected(),
        FileType::WindowsExecutable
    );
    assert_eq!(outcomes[3].as_ref().unwrap().detected(), FileType::Jpeg);
}

// ============================================================================
// Filesystem-backed Tests
// ============================================================================

#[rstest]
fn test_from_options_on_real_files() {
    let dir = TempDir::new().unwrap();
    let disguised = dir.path().join("notes.txt");
    fs::write(&disguised, [0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01, 0x01]).unwrap();
    let honest = dir.path().join("Photo.JPEG");
    fs::write(&honest, [0xFF, 0xD8, 0xFF, 0xE1]).unwrap();

    let uc = AnalyzeFileUseCase::from_options(&AnalyzeOptions::new().without_oracle());

    let result = uc.analyze(&disguised).unwrap();
    assert_eq!(result.detected(), FileType::LinuxExecutable);
    assert!(result.mismatch());

    let result = uc.analyze(&honest).unwrap();
    assert_eq!(result.detected(), FileType::Jpeg);
    assert_eq!(result.extension(), ".jpeg");
    assert!(!result.mismatch());
}

#[rstest]
fn test_directory_is_path_not_found() {
    let dir = TempDir::new().unwrap();
    let uc = AnalyzeFileUseCase::from_options(&AnalyzeOptions::new().without_oracle());

    assert!(matches!(
        uc.analyze(dir.path()),
        Err(AnalyzeError::PathNotFound(_))
    ));
}

#[rstest]
fn test_default_options() {
    let options = AnalyzeOptions::default();
    assert_eq!(options.prefix_len, 32);
    assert!(options.use_oracle);
    assert_eq!(options.oracle_program, "file");
}
