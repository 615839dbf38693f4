//! Signature database service
//!
//! Holds the ordered table of magic numbers and answers "what type does this
//! header belong to?". Row order is the priority: the first entry whose
//! pattern is a prefix of the input wins, so an earlier, shorter pattern
//! shadows any later pattern that extends it.

use crate::domain::entities::{FileType, SignatureEntry};
use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use thiserror::Error;

/// The compiled-in signature table, in match-priority order
pub const BUILTIN_SIGNATURES: &[SignatureEntry] = &[
    // Images
    SignatureEntry::new(&[0xFF, 0xD8, 0xFF], FileType::Jpeg),
    SignatureEntry::new(&[0x89, 0x50, 0x4E, 0x47], FileType::Png),
    SignatureEntry::new(&[0x47, 0x49, 0x46, 0x38], FileType::Gif),
    SignatureEntry::new(&[0x42, 0x4D], FileType::Bmp),
    SignatureEntry::new(&[0x49, 0x49, 0x2A, 0x00], FileType::TiffLittleEndian),
    SignatureEntry::new(&[0x4D, 0x4D, 0x00, 0x2A], FileType::TiffBigEndian),
    // Audio
    SignatureEntry::new(&[0x49, 0x44, 0x33], FileType::Mp3),
    SignatureEntry::new(&[0x2E, 0x52, 0x4D, 0x46], FileType::RealMedia),
    SignatureEntry::new(&[0x57, 0x41, 0x56, 0x45], FileType::Wav),
    // Documents and archives
    SignatureEntry::new(&[0x25, 0x50, 0x44, 0x46], FileType::Pdf),
    SignatureEntry::new(&[0x50, 0x4B, 0x03, 0x04], FileType::Zip),
    SignatureEntry::new(&[0x1F, 0x8B], FileType::Gzip),
    SignatureEntry::new(&[0x42, 0x5A], FileType::Bzip),
    SignatureEntry::new(&[0x75, 0x73, 0x74, 0x61], FileType::Tar),
    // Executables
    SignatureEntry::new(&[0x4D, 0x5A], FileType::WindowsExecutable),
    SignatureEntry::new(&[0x7F, 0x45, 0x4C, 0x46], FileType::LinuxExecutable),
    SignatureEntry::new(&[0xCA, 0xFE, 0xBA, 0xBE], FileType::JavaClass),
    // Video
    SignatureEntry::new(&[0x00, 0x00, 0x00, 0x18, 0x66, 0x74, 0x79, 0x70], FileType::Mp4),
    SignatureEntry::new(&[0x00, 0x00, 0x00, 0x20, 0x66, 0x74, 0x79, 0x70], FileType::Mp4),
    SignatureEntry::new(&[0x00, 0x00, 0x00, 0x14, 0x66, 0x74, 0x79, 0x70], FileType::Mp4Mov),
    SignatureEntry::new(&[0x1A, 0x45, 0xDF, 0xA3], FileType::Matroska),
];

/// Errors raised when a signature table breaks its integrity rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature #{index} has an empty pattern")]
    EmptyPattern { index: usize },

    #[error("signatures #{first} and #{second} share the pattern {pattern}")]
    DuplicatePattern {
        first: usize,
        second: usize,
        pattern: String,
    },
}

/// Ordered collection of signatures with a first-match lookup
///
/// # Example
///
/// ```
/// use magic_scan::domain::entities::FileType;
/// use magic_scan::domain::services::SignatureDatabase;
///
/// let db = SignatureDatabase::builtin();
/// assert_eq!(db.classify(&[0xFF, 0xD8, 0xFF, 0xE0]), FileType::Jpeg);
/// assert_eq!(db.classify(&[]), FileType::Unknown);
/// ```
#[derive(Debug, Clone)]
pub struct SignatureDatabase {
    entries: Vec<SignatureEntry>,
    /// Anchored leftmost-first automaton; `None` falls back to a linear scan
    pattern_matcher: Option<AhoCorasick>,
}

impl SignatureDatabase {
    /// Builds a database from `entries`, keeping their order
    ///
    /// Rejects empty patterns and byte-identical duplicates. Patterns that
    /// are shadowed by an earlier prefix are allowed but logged.
    pub fn new(entries: Vec<SignatureEntry>) -> Result<Self, SignatureError> {
        validate(&entries)?;

        for (earlier, later) in shadowed_pairs(&entries) {
            tracing::warn!(
                "signature #{} ({}) is shadowed by earlier signature #{} ({})",
                later,
                entries[later].pattern_hex(),
                earlier,
                entries[earlier].pattern_hex()
            );
        }

        Ok(Self::from_validated(entries))
    }

    /// Returns the compiled-in table
    pub fn builtin() -> Self {
        Self::from_validated(BUILTIN_SIGNATURES.to_vec())
    }

    fn from_validated(entries: Vec<SignatureEntry>) -> Self {
        let pattern_matcher = match AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .start_kind(StartKind::Anchored)
            .build(entries.iter().map(|e| e.pattern()))
        {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                tracing::warn!("falling back to linear signature scan: {}", e);
                None
            }
        };

        Self {
            entries,
            pattern_matcher,
        }
    }

    /// Returns the type of the first entry whose pattern starts `prefix`
    ///
    /// Empty or too-short input yields [`FileType::Unknown`]. Never fails.
    pub fn classify(&self, prefix: &[u8]) -> FileType {
        let Some(matcher) = &self.pattern_matcher else {
            return self.classify_linear(prefix);
        };

        // Leftmost-first on an anchored search reports the lowest pattern
        // index among all patterns that are a prefix of the input.
        match matcher.try_find(Input::new(prefix).anchored(Anchored::Yes)) {
            Ok(Some(mat)) => {
                let entry = &self.entries[mat.pattern().as_usize()];
                tracing::debug!(
                    "matched signature {} -> {}",
                    entry.pattern_hex(),
                    entry.file_type()
                );
                entry.file_type()
            }
            Ok(None) => FileType::Unknown,
            Err(_) => self.classify_linear(prefix),
        }
    }

    /// Sequential scan with early exit; the reference behaviour for `classify`
    pub fn classify_linear(&self, prefix: &[u8]) -> FileType {
        self.entries
            .iter()
            .find(|entry| entry.matches_header(prefix))
            .map(|entry| entry.file_type())
            .unwrap_or(FileType::Unknown)
    }

    /// Returns the entries in priority order
    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the shortest pattern; inputs shorter than this are Unknown
    pub fn shortest_pattern_len(&self) -> usize {
        self.entries.iter().map(|e| e.pattern().len()).min().unwrap_or(0)
    }

    /// Length of the longest pattern; no byte past this affects `classify`
    pub fn longest_pattern_len(&self) -> usize {
        self.entries.iter().map(|e| e.pattern().len()).max().unwrap_or(0)
    }

    /// Pairs `(earlier, later)` where the later entry can never match
    pub fn shadowed(&self) -> Vec<(usize, usize)> {
        shadowed_pairs(&self.entries)
    }
}

impl Default for SignatureDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(entries: &[SignatureEntry]) -> Result<(), SignatureError> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.pattern().is_empty() {
            return Err(SignatureError::EmptyPattern { index });
        }
        if let Some(first) = entries[..index]
            .iter()
            .position(|other| other.pattern() == entry.pattern())
        {
            return Err(SignatureError::DuplicatePattern {
                first,
                second: index,
                pattern: entry.pattern_hex(),
            });
        }
    }
    Ok(())
}

fn shadowed_pairs(entries: &[SignatureEntry]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (later, entry) in entries.iter().enumerate() {
        if let Some(earlier) = entries[..later]
            .iter()
            .position(|other| entry.pattern().starts_with(other.pattern()))
        {
            pairs.push((earlier, later));
        }
    }
    pairs
}
