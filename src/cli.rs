use clap::Parser;
use std::path::PathBuf;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "dirsize",
    version,
    about = "Report the total size of each subdirectory of a directory"
)]
pub struct Cli {
    /// Directory whose immediate subdirectories are measured
    #[arg(required_unless_present = "cwd")]
    pub directory_path: Option<PathBuf>,

    /// Log file that progress and errors are appended to
    #[arg(required_unless_present = "cwd")]
    pub log_file_path: Option<PathBuf>,

    /// Measure the current directory and log to directory_sizes.log
    #[arg(long, conflicts_with_all = ["directory_path", "log_file_path"])]
    pub cwd: bool,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Omit timestamps from log lines
    #[arg(long)]
    pub no_timestamps: bool,

    /// Omit INFO/ERROR levels from log lines
    #[arg(long)]
    pub no_levels: bool,

    /// Show a spinner on stderr while measuring
    #[arg(long)]
    pub progress: bool,
}
