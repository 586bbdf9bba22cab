//! Spinners for long directory walks
//!
//! The size walk only sees these traits; indicatif lives behind them.
//! Everything is drawn on stderr, never on the report stream.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Live spinner for one directory; `inc` counts visited files
pub trait ProgressHandle {
    fn inc(&self, n: u64);
    fn finish(&self);
}

/// Hands out one spinner per directory measured
pub trait ProgressReporter {
    fn start(&self, label: &str) -> Box<dyn ProgressHandle>;
}

/// Terminal spinner showing the directory name and a running file count
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn start(&self, label: &str) -> Box<dyn ProgressHandle> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}: {pos} files ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Box::new(IndicatifHandle(pb))
    }
}

struct IndicatifHandle(ProgressBar);

impl ProgressHandle for IndicatifHandle {
    fn inc(&self, n: u64) {
        self.0.inc(n);
    }

    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

/// Draws nothing (default without `--progress`)
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _label: &str) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }
}

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn inc(&self, _n: u64) {}
    fn finish(&self) {}
}

/// Picks the terminal spinner or nothing from the `--progress` flag
pub struct VerboseProgress {
    verbose: bool,
}

impl VerboseProgress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for VerboseProgress {
    fn start(&self, label: &str) -> Box<dyn ProgressHandle> {
        if self.verbose {
            IndicatifProgress.start(label)
        } else {
            NoopProgress.start(label)
        }
    }
}
