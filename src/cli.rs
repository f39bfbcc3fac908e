use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "po-unfuzzy")]
#[command(author, version, about = "Unfuzzy PO entries whose msgctxt only shifted by a few lines")]
#[command(long_about = "Removes the 'fuzzy' flag from gettext catalog entries whose previous and \
    current msgctxt differ only by numeric line offsets (\":<start>-<len>\") with each \
    corresponding <start> delta within the configured threshold.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - File not found or I/O failure")]
pub struct Cli {
    /// Input catalog file (.po)
    pub file: PathBuf,

    /// Output file (default: overwrite input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum allowed line offset delta per location pair (set 0 to disable the heuristic)
    #[arg(long, default_value_t = 8)]
    pub line_shift_threshold: i64,

    /// Do not modify the file; just report what would change
    #[arg(long)]
    pub dry_run: bool,

    /// Trace each line-shift decision to stderr
    #[arg(long)]
    pub debug_line_shift: bool,

    /// Do not create a .bak backup when overwriting the input
    #[arg(long)]
    pub no_backup: bool,

    /// Per-entry accept/reject reporting
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
