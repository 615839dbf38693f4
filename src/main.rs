use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use std::io::Write;
use std::process::ExitCode;

use magic_scan::AnalyzeFileUseCase;
use magic_scan::presentation::cli::{
    Cli, Commands, EXIT_ERROR, EXIT_INTERRUPTED, EXIT_OK, Theme, exit_code_for,
    run_interactive, write_error, write_json, write_report, write_signature_table,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }
    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::colored()
    };

    ctrlc::set_handler(|| {
        let _ = Term::stdout().show_cursor();
        std::process::exit(i32::from(EXIT_INTERRUPTED));
    })
    .context("Failed to set Ctrl+C handler")?;

    let use_case = AnalyzeFileUseCase::from_options(&cli.analyze_options());

    match &cli.command {
        None => {
            run_interactive(&use_case, &theme, !cli.no_clear)?;
            Ok(EXIT_OK)
        }
        Some(Commands::Scan { paths, json }) => {
            let outcomes = use_case.analyze_many(paths);
            let stdout = std::io::stdout();
            let mut out = stdout.lock();

            if *json {
                write_json(&mut out, paths, &outcomes)?;
            } else {
                for outcome in &outcomes {
                    match outcome {
                        Ok(result) => write_report(&mut out, result, &theme)?,
                        Err(e) => write_error(&mut out, e, &theme)?,
                    }
                    writeln!(out)?;
                }
            }

            Ok(exit_code_for(&outcomes))
        }
        Some(Commands::ListSignatures) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_signature_table(&mut out, use_case.signatures().entries(), &theme)?;
            Ok(EXIT_OK)
        }
    }
}
