//! CLI module

mod commands;
mod exit;
mod interactive;
mod report;
mod theme;

pub use commands::{Cli, Commands};
pub use exit::{EXIT_ERROR, EXIT_INTERRUPTED, EXIT_MISMATCH, EXIT_OK, exit_code_for};
pub use interactive::{parse_path_input, run_interactive, run_piped};
pub use report::{
    write_banner, write_error, write_json, write_report, write_signature_table,
};
pub use theme::Theme;
