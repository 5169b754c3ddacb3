//! Batch Rendering
//!
//! All runs of one benchmark are printed together. Batches of two or more
//! runs are followed by a mean row and a standard deviation row.

use super::row::print_run;
use super::{ColorSink, ConsoleReporter, ReportError};
use benchtable_report::Run;
use benchtable_stats::{MIN_AGGREGATE_RUNS, compute_stats};
use std::io::Write;
use tracing::{debug, error};

impl<S: ColorSink, E: Write> ConsoleReporter<S, E> {
    /// Print every run of one benchmark, then the aggregate rows.
    ///
    /// An empty batch prints nothing. A batch mixing benchmark names is
    /// rejected with [`ReportError::InconsistentBatch`] before any of its rows
    /// is printed.
    pub fn report_runs(&mut self, runs: &[Run]) -> Result<(), ReportError> {
        let Some(first) = runs.first() else {
            return Ok(());
        };
        let layout = self.layout.ok_or(ReportError::ContextNotReported)?;

        if let Some(stray) = runs
            .iter()
            .find(|r| r.benchmark_name != first.benchmark_name)
        {
            error!(
                expected = %first.benchmark_name,
                found = %stray.benchmark_name,
                "Batch mixes runs of different benchmarks"
            );
            return Err(ReportError::InconsistentBatch {
                expected: first.benchmark_name.clone(),
                found: stray.benchmark_name.clone(),
            });
        }

        debug!(benchmark = %first.benchmark_name, runs = runs.len(), "Reporting batch");

        for run in runs {
            print_run(&mut self.sink, run, &layout)?;
        }

        if runs.len() >= MIN_AGGREGATE_RUNS {
            let (mean, stddev) = compute_stats(runs)?;
            print_run(&mut self.sink, &mean, &layout)?;
            print_run(&mut self.sink, &stddev, &layout)?;
        }

        self.sink.flush()?;
        Ok(())
    }
}
