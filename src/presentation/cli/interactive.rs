//! Interactive prompt loop
//!
//! Clear, banner, ask for a path, report, wait for Enter, repeat. Per-file
//! errors are shown and the loop goes on; only `q`/`quit`/`exit`, closed
//! stdin, or Ctrl-C end it. When stdin is not a terminal the same loop runs
//! over its lines, one path per line, without the prompt or the pause.

use super::report::{write_banner, write_error, write_report};
use super::theme::Theme;
use crate::application::AnalyzeFileUseCase;
use anyhow::Result;
use console::Term;
use dialoguer::Input;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme as PromptTheme};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

/// Runs the prompt loop until the user quits
pub fn run_interactive(use_case: &AnalyzeFileUseCase, theme: &Theme, clear: bool) -> Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        tracing::debug!("stdin is not a terminal, reading paths line by line");
        return run_piped(use_case, theme, stdin.lock(), io::stdout().lock());
    }

    let term = Term::stdout();
    let colorful = ColorfulTheme::default();
    let prompt_theme: &dyn PromptTheme = if theme.is_colored() {
        &colorful
    } else {
        &SimpleTheme
    };

    loop {
        if clear {
            term.clear_screen()?;
        }
        let mut out = term.clone();
        write_banner(&mut out, theme)?;

        let answer = Input::<String>::with_theme(prompt_theme)
            .with_prompt("Enter file path to analyze (q to quit)")
            .interact_text_on(&term);

        let raw = match answer {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("prompt closed: {}", e);
                return Ok(());
            }
        };

        let Some(path) = parse_path_input(&raw) else {
            return Ok(());
        };
        writeln!(out)?;

        match use_case.analyze(Path::new(path)) {
            Ok(result) => write_report(&mut out, &result, theme)?,
            Err(e) => write_error(&mut out, &e, theme)?,
        }

        writeln!(out)?;
        write!(out, "{}", theme.prompt.apply_to("Press Enter to continue ..."))?;
        out.flush()?;
        if term.read_line().is_err() {
            return Ok(());
        }
    }
}

/// Analyses one path per input line until a quit word or end of input
///
/// Blank lines are skipped, so a scripted "path, Enter, path" session reads
/// the same as it would at the prompt.
pub fn run_piped<R: BufRead, W: Write>(
    use_case: &AnalyzeFileUseCase,
    theme: &Theme,
    input: R,
    mut out: W,
) -> Result<()> {
    write_banner(&mut out, theme)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(path) = parse_path_input(&line) else {
            break;
        };

        match use_case.analyze(Path::new(path)) {
            Ok(result) => write_report(&mut out, &result, theme)?,
            Err(e) => write_error(&mut out, &e, theme)?,
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Normalises a typed path; `None` means the user asked to quit
///
/// Surrounding whitespace and one pair of matching quotes (as left by
/// drag-and-drop in many terminals) are removed. A file actually named `q`,
/// `quit` or `exit` is reached with a directory prefix such as `./q`.
pub fn parse_path_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if QUIT_WORDS.contains(&trimmed.to_ascii_lowercase().as_str()) {
        return None;
    }

    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| {
            trimmed
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(trimmed);

    Some(unquoted)
}
