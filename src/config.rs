use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::logger::LogStyle;
use crate::report::OutputFormat;

/// Log file used when running against the current directory
pub const DEFAULT_LOG_FILE: &str = "directory_sizes.log";

/// Where the target directory came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Given on the command line; validated before use
    Explicit(PathBuf),
    /// The process's working directory; trusted as-is
    CurrentDir(PathBuf),
}

impl Target {
    pub fn path(&self) -> &Path {
        match self {
            Target::Explicit(p) | Target::CurrentDir(p) => p.as_path(),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: Target,
    pub log_path: PathBuf,
    pub log_style: LogStyle,
    pub format: OutputFormat,
    pub progress: bool,
}

impl RunConfig {
    pub fn new(target: Target, log_path: impl Into<PathBuf>) -> Self {
        Self {
            target,
            log_path: log_path.into(),
            log_style: LogStyle::default(),
            format: OutputFormat::Text,
            progress: false,
        }
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        let (target, log_path) = match (cli.cwd, cli.directory_path, cli.log_file_path) {
            (true, _, _) => {
                let cwd = env::current_dir().map_err(Error::CurrentDir)?;
                let log = cwd.join(DEFAULT_LOG_FILE);
                (Target::CurrentDir(cwd), log)
            }
            (false, Some(dir), Some(log)) => (Target::Explicit(dir), log),
            (false, _, _) => return Err(Error::MissingArguments),
        };

        Ok(Self {
            target,
            log_path,
            log_style: LogStyle {
                timestamps: !cli.no_timestamps,
                levels: !cli.no_levels,
            },
            format: cli.format,
            progress: cli.progress,
        })
    }
}
