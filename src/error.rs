use std::io;
use std::path::PathBuf;

/// Fatal errors of a run. Per-directory traversal failures are not
/// errors at this level; they surface as [`crate::scan::SizeResult::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to open log file: {}", path.display())]
    LogOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Usage: dirsize <directory_path> <log_file_path>")]
    MissingArguments,

    #[error("Invalid directory path: {}", .0.display())]
    InvalidTarget(PathBuf),

    #[error("Could not determine current directory")]
    CurrentDir(#[source] io::Error),

    #[error("Failed to write report")]
    Output(#[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
