//! CLI commands using clap

use crate::application::dto::AnalyzeOptions;
use crate::infrastructure::oracle::DEFAULT_FILE_PROGRAM;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// Magic - File Type & Magic Number Scanner
///
/// Identifies a file's real type from its leading bytes and raises an alert
/// when the extension says otherwise. Run without a subcommand for the
/// interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "magic")]
#[command(version)]
#[command(about = "Detect file types by magic number and flag extension mismatches", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not run the external `file` command
    #[arg(long, global = true)]
    pub no_file_cmd: bool,

    /// Program used as the external type oracle
    #[arg(long, global = true, value_name = "PROGRAM", default_value = DEFAULT_FILE_PROGRAM)]
    pub file_cmd: String,

    /// Do not clear the screen between interactive analyses
    #[arg(long, global = true)]
    pub no_clear: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more files and exit
    Scan {
        /// Files to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print a JSON array instead of the coloured report
        #[arg(long)]
        json: bool,
    },

    /// List the signature table in match-priority order
    ListSignatures,
}

impl Cli {
    /// Builds the analysis options from the global flags
    pub fn analyze_options(&self) -> AnalyzeOptions {
        let options = AnalyzeOptions::new().with_oracle_program(self.file_cmd.clone());
        if self.no_file_cmd {
            options.without_oracle()
        } else {
            options
        }
    }

    /// Returns the most verbose level requested
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}
