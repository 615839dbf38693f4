//! Verdict engine
//!
//! Decides whether a detected type is consistent with the file's extension.
//! Rules are tried in order and the first rule whose needle occurs in the
//! type's label decides. A type that no rule claims is never flagged.

use crate::domain::entities::{FileType, Verdict, VerdictReason};
use std::path::Path;

/// Maps a class of type labels to the extensions they may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// Substring looked for in the detected label
    pub needle: &'static str,
    /// Lowercase extensions with their leading dot
    pub allowed: &'static [&'static str],
}

impl CategoryRule {
    /// Creates a new rule
    pub const fn new(needle: &'static str, allowed: &'static [&'static str]) -> Self {
        Self { needle, allowed }
    }

    /// Returns true if this rule claims `file_type`
    pub fn applies_to(&self, file_type: FileType) -> bool {
        file_type.name().contains(self.needle)
    }

    /// Returns true if `extension` is on the allow-list (case-insensitive)
    pub fn allows(&self, extension: &str) -> bool {
        self.allowed
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}

/// Category rules in evaluation order. "Executable" must come first.
pub const DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule::new("Executable", &[".exe", ".dll", ".bin", ".elf", ".o", ".msi"]),
    CategoryRule::new("JPEG", &[".jpg", ".jpeg"]),
    CategoryRule::new("PNG", &[".png"]),
    CategoryRule::new("GIF", &[".gif"]),
    CategoryRule::new("PDF", &[".pdf"]),
    CategoryRule::new("ZIP", &[".zip", ".docx", ".xlsx", ".pptx", ".jar", ".apk"]),
];

/// Evaluates (type, extension) pairs against an ordered rule list
#[derive(Debug, Clone)]
pub struct VerdictEngine {
    rules: Vec<CategoryRule>,
}

impl VerdictEngine {
    /// Creates an engine with a custom rule list
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Returns the rules in evaluation order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Returns the first rule that claims `file_type`
    pub fn rule_for(&self, file_type: FileType) -> Option<&CategoryRule> {
        self.rules.iter().find(|rule| rule.applies_to(file_type))
    }

    /// Produces the verdict for a detected type and an extension
    ///
    /// The extension is normalised to lowercase before it is stored.
    pub fn evaluate(&self, file_type: FileType, extension: &str) -> Verdict {
        let extension = extension.to_lowercase();

        let reason = if file_type.is_unknown() {
            VerdictReason::Unverifiable
        } else {
            match self.rule_for(file_type) {
                None => VerdictReason::NoRule,
                Some(rule) if rule.allows(&extension) => VerdictReason::Verified,
                Some(rule) => VerdictReason::Mismatch {
                    allowed: rule.allowed,
                },
            }
        };

        Verdict::new(file_type, extension, reason)
    }
}

impl Default for VerdictEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

/// Returns the lowercased final extension of `path` with its leading dot
///
/// Leading dots of the file name never start an extension, so `.bashrc` and
/// `..bashrc` have none; a trailing dot yields `"."`.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    let stem = name.trim_start_matches('.');

    stem.rfind('.')
        .map(|dot| stem[dot..].to_lowercase())
        .unwrap_or_default()
}
