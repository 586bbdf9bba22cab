use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;

use crate::logger::RunLog;
use crate::progress::ProgressReporter;
use crate::util::{display_name, human_readable_size};

/// Outcome of measuring one directory
///
/// An empty directory is `Size(0)`; a walk that hit an error is `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeResult {
    Size(u64),
    Failed(String),
}

impl SizeResult {
    pub fn bytes(&self) -> Option<u64> {
        match self {
            SizeResult::Size(n) => Some(*n),
            SizeResult::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SizeResult::Failed(_))
    }

    /// Human-readable size, or `Error` for a failed measurement
    pub fn display(&self) -> String {
        match self {
            SizeResult::Size(n) => human_readable_size(*n),
            SizeResult::Failed(_) => "Error".to_string(),
        }
    }
}

/// Sum the sizes of all regular files under `dir`.
///
/// Symlinks below `dir` are not followed and not counted. The first
/// traversal error aborts the walk.
pub fn directory_size(dir: &Path) -> Result<u64, walkdir::Error> {
    sum_regular_files(dir, |_| {})
}

fn sum_regular_files(dir: &Path, mut on_file: impl FnMut(u64)) -> Result<u64, walkdir::Error> {
    let mut total = 0u64;
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let len = entry.metadata()?.len();
        total += len;
        on_file(len);
    }
    Ok(total)
}

/// Measures subdirectories, recording failures in the run log
pub struct SizeCalculator<'a> {
    progress: &'a dyn ProgressReporter,
}

impl<'a> SizeCalculator<'a> {
    pub fn new(progress: &'a dyn ProgressReporter) -> Self {
        Self { progress }
    }

    pub fn calculate<W: Write>(&self, dir: &Path, log: &mut RunLog<W>) -> SizeResult {
        let handle = self.progress.start(&display_name(dir));
        let result = sum_regular_files(dir, |_| handle.inc(1));
        handle.finish();

        match result {
            Ok(total) => SizeResult::Size(total),
            Err(err) => {
                log.error(&format!(
                    "Filesystem error: {} in directory: {}",
                    err,
                    dir.display()
                ));
                SizeResult::Failed(err.to_string())
            }
        }
    }
}
