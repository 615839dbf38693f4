//! Report rendering
//!
//! Turns scan results into the human-readable report and the JSON document.

use super::theme::Theme;
use crate::application::AnalyzeError;
use crate::domain::entities::{ScanResult, SignatureEntry, VerdictReason};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 50;

/// ASCII-art banner shown at the top of the interactive screen
const BANNER_ART: &str = r"
    ███╗   ███╗ █████╗  ██████╗ ██╗ ██████╗
    ████╗ ████║██╔══██╗██╔════╝ ██║██╔════╝
    ██╔████╔██║███████║██║  ███╗██║██║
    ██║╚██╔╝██║██╔══██║██║   ██║██║██║
    ██║ ╚═╝ ██║██║  ██║╚██████╔╝██║╚██████╗
    ╚═╝     ╚═╝╚═╝  ╚═╝ ╚═════╝ ╚═╝ ╚═════╝";

/// Writes the banner with the version line
pub fn write_banner<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.banner.apply_to(BANNER_ART))?;
    writeln!(
        out,
        "             {}",
        theme.tagline.apply_to(format!(
            "v{} - File Type & Magic Number Scanner",
            env!("CARGO_PKG_VERSION")
        ))
    )?;
    writeln!(out)
}

/// Writes the full report for one analysed file
pub fn write_report<W: Write>(out: &mut W, result: &ScanResult, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.heading.apply_to("--- Magic Number Analysis ---"))?;
    writeln!(out, "File: {}", result.path().display())?;
    writeln!(out, "Raw hex: {}", theme.hex.apply_to(result.raw_prefix_hex()))?;
    if let Some(error) = result.read_error() {
        writeln!(out, "{}", theme.warning.apply_to(format!("[!] {}", error)))?;
    }
    writeln!(out, "Detected: {}", theme.detected.apply_to(result.detected()))?;
    writeln!(out)?;

    writeln!(
        out,
        "File extension: {}",
        theme.extension.apply_to(display_extension(result.extension()))
    )?;
    writeln!(out)?;

    writeln!(out, "{}", theme.heading.apply_to("--- System File Command ---"))?;
    match result.oracle() {
        Some(oracle) => writeln!(out, "{}", oracle.text())?,
        None => writeln!(out, "{}", theme.muted.apply_to("(skipped)"))?,
    }
    writeln!(out)?;

    writeln!(out, "{}", theme.heading.apply_to("--- Final Verdict ---"))?;
    write_verdict(out, result, theme)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn write_verdict<W: Write>(out: &mut W, result: &ScanResult, theme: &Theme) -> io::Result<()> {
    let verdict = result.verdict();
    match verdict.reason() {
        VerdictReason::Unverifiable => writeln!(
            out,
            "{}",
            theme
                .warning
                .apply_to("[?] Signature unknown. Cannot verify integrity.")
        ),
        VerdictReason::Mismatch { .. } => {
            writeln!(
                out,
                "{}",
                theme
                    .alert
                    .apply_to("[!!!] SECURITY ALERT: EXTENSION MISMATCH! [!!!]")
            )?;
            writeln!(
                out,
                "{}",
                theme.alert.apply_to(format!(
                    " >> The file header says it is: {}",
                    verdict.file_type()
                ))
            )?;
            writeln!(
                out,
                "{}",
                theme.alert.apply_to(format!(
                    " >> But the extension is:       {}",
                    display_extension(verdict.extension())
                ))
            )?;
            writeln!(
                out,
                "{}",
                theme
                    .alert
                    .apply_to(" >> This is a common malware hiding tactic.")
            )
        }
        VerdictReason::Verified => write_ok(out, theme),
        VerdictReason::NoRule => {
            write_ok(out, theme)?;
            writeln!(
                out,
                "{}",
                theme.muted.apply_to(format!(
                    "     (no extension rule for {}; extension not checked)",
                    verdict.file_type()
                ))
            )
        }
    }
}

fn write_ok<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme
            .ok
            .apply_to("[OK] Verified: File signature matches the extension.")
    )
}

/// Writes the one-line error shown for a path that cannot be analysed
pub fn write_error<W: Write>(out: &mut W, error: &AnalyzeError, theme: &Theme) -> io::Result<()> {
    let message = match error {
        AnalyzeError::PathNotFound(path) => {
            format!("[!] Error: File not found. ({})", path.display())
        }
    };
    writeln!(out, "{}", theme.alert.apply_to(message))
}

/// Writes the signature table in priority order
pub fn write_signature_table<W: Write>(
    out: &mut W,
    entries: &[SignatureEntry],
    theme: &Theme,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme
            .heading
            .apply_to(format!("{:>3}  {:<18} {}", "#", "PATTERN", "TYPE"))
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (index, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<18} {}",
            index + 1,
            entry.pattern_hex(),
            entry.file_type()
        )?;
    }
    Ok(())
}

fn display_extension(extension: &str) -> &str {
    if extension.is_empty() {
        "(none)"
    } else {
        extension
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry<'a> {
    Report(&'a ScanResult),
    Error { path: &'a Path, error: String },
}

/// Writes all outcomes as one pretty-printed JSON array
pub fn write_json<W: Write>(
    out: &mut W,
    paths: &[PathBuf],
    outcomes: &[Result<ScanResult, AnalyzeError>],
) -> anyhow::Result<()> {
    let entries: Vec<JsonEntry<'_>> = paths
        .iter()
        .zip(outcomes)
        .map(|(path, outcome)| match outcome {
            Ok(result) => JsonEntry::Report(result),
            Err(e) => JsonEntry::Error {
                path: path.as_path(),
                error: e.to_string(),
            },
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}
