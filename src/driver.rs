//! One full run: validate, list, measure, report

use std::io::Write;

use crate::config::{RunConfig, Target};
use crate::error::{Error, Result};
use crate::logger::RunLog;
use crate::progress::{ProgressReporter, VerboseProgress};
use crate::report::{ReportLine, Reporter};
use crate::scan::{SizeCalculator, list_entries};

/// What a run did, for callers and the closing log record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Report lines written, failures included
    pub reported: usize,
    pub failed: usize,
    /// Plain files and hidden entries passed over
    pub skipped: usize,
    /// The top-level listing failed before it was exhausted
    pub listing_interrupted: bool,
}

/// Run against the configured target, writing the report to `out`.
///
/// The log is opened first; if that fails nothing else happens. The log
/// is flushed and closed on every return path.
pub fn run<W: Write>(config: &RunConfig, out: W) -> Result<RunSummary> {
    let mut log = RunLog::open(&config.log_path, config.log_style)?;
    let progress = VerboseProgress::new(config.progress);
    let mut reporter = Reporter::new(out, config.format);
    run_with(&config.target, &mut log, &progress, &mut reporter)
}

pub fn run_with<L: Write, W: Write>(
    target: &Target,
    log: &mut RunLog<L>,
    progress: &dyn ProgressReporter,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary> {
    if let Target::Explicit(dir) = target {
        if !dir.is_dir() {
            log.error(&format!("Invalid directory path: {}", dir.display()));
            return Err(Error::InvalidTarget(dir.clone()));
        }
    }

    let dir = target.path();
    let calculator = SizeCalculator::new(progress);
    let mut summary = RunSummary::default();

    match list_entries(dir) {
        Ok(entries) => {
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log.error(&format!(
                            "Filesystem error: {} while listing: {}",
                            err,
                            dir.display()
                        ));
                        summary.listing_interrupted = true;
                        break;
                    }
                };

                if !entry.is_reportable() {
                    summary.skipped += 1;
                    continue;
                }

                log.info(&format!("Processing directory: {}", entry.path.display()));
                let size = calculator.calculate(&entry.path, log);
                if size.is_failed() {
                    summary.failed += 1;
                }

                reporter.write_line(&ReportLine {
                    name: entry.name,
                    path: entry.path,
                    size,
                })?;
                summary.reported += 1;
            }
        }
        Err(err) => {
            log.error(&format!(
                "Filesystem error: {} while listing: {}",
                err,
                dir.display()
            ));
            summary.listing_interrupted = true;
        }
    }

    log.info(&format!(
        "Finished: {} directories reported, {} failed",
        summary.reported, summary.failed
    ));
    Ok(summary)
}
