//! Progress indicators for CLI operations
//!
//! Spinners and bars draw on stderr and hide themselves when stderr is not a
//! terminal, so they never mix with reports on stdout.

use crate::aggregator::AggregationObserver;
use indicatif::{ProgressBar, ProgressStyle};
use ppi_common::Source;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(TICK);
    pb
}

/// Create a progress bar with a custom message
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Spinner that names the database currently being queried
pub struct QuerySpinner {
    bar: ProgressBar,
}

impl QuerySpinner {
    pub fn new(gene: &str) -> Self {
        Self {
            bar: create_spinner(&format!("Aggregating data for {}...", gene)),
        }
    }

    /// Stop the spinner and clear its line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl AggregationObserver for QuerySpinner {
    fn querying(&self, gene: &str, source: Source) {
        self.bar.set_message(format!("Querying {} for {}...", source, gene));
    }
}

impl Drop for QuerySpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Bar over a batch of genes, advanced as each record completes
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            bar: create_progress_bar(total as u64, &format!("Aggregating {} genes...", total)),
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl AggregationObserver for BatchProgress {
    fn querying(&self, gene: &str, source: Source) {
        self.bar.set_message(format!("Querying {} for {}...", source, gene));
    }

    fn finished(&self, _gene: &str) {
        self.bar.inc(1);
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
