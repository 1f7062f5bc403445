use std::path::PathBuf;

use clap::Parser;

/// Convert Google Chrome's history file to a date-grouped HTML report.
#[derive(Parser, Debug)]
#[command(author, version, about, allow_missing_positional = true)]
pub struct CliOptions {
    /// Chrome history file to read. When omitted, the file is looked up
    /// in Chrome's default location for this platform.
    pub input_file: Option<PathBuf>,

    /// Location where the HTML report will be written.
    pub output_file: PathBuf,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
