//! Batch Aggregates
//!
//! Times are aggregated per iteration so repetitions with different iteration
//! counts stay comparable:
//! - The mean run carries the mean iteration count and per-iteration means
//!   scaled back up by it
//! - The stddev run carries zero iterations, so the reporter's divisor is one
//!   and its time columns show the per-iteration deviation directly
//!
//! Throughput figures are already rates and are aggregated as-is.

use crate::summary::{mean, sample_std_dev};
use benchtable_report::Run;
use thiserror::Error;

/// Errors from aggregate computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("Cannot aggregate fewer than 2 runs (got {0})")]
    TooFewRuns(usize),

    #[error("Run '{found}' does not belong to batch '{expected}'")]
    MismatchedName { expected: String, found: String },
}

/// Compute the mean and sample standard deviation runs of a batch.
///
/// Name, time unit and the manual/real display flag come from the first run.
/// The label is kept only when every run carries the same one, otherwise the
/// aggregates are unlabelled.
pub fn compute_stats(runs: &[Run]) -> Result<(Run, Run), StatsError> {
    if runs.len() < crate::MIN_AGGREGATE_RUNS {
        return Err(StatsError::TooFewRuns(runs.len()));
    }

    let first = &runs[0];
    if let Some(stray) = runs
        .iter()
        .find(|r| r.benchmark_name != first.benchmark_name)
    {
        return Err(StatsError::MismatchedName {
            expected: first.benchmark_name.clone(),
            found: stray.benchmark_name.clone(),
        });
    }

    let iterations = mean(&field(runs, |r| r.iterations as f64)).round() as u64;
    let scale = iterations.max(1) as f64;

    let real = per_iteration(runs, |r| r.real_accumulated_time);
    let cpu = per_iteration(runs, |r| r.cpu_accumulated_time);
    let manual = per_iteration(runs, |r| r.manual_accumulated_time);
    let bytes = field(runs, |r| r.bytes_per_second);
    let items = field(runs, |r| r.items_per_second);
    let manual_bytes = field(runs, |r| r.bytes_per_manual_second);
    let manual_items = field(runs, |r| r.items_per_manual_second);

    let mean_run = Run {
        benchmark_name: first.benchmark_name.clone(),
        iterations,
        time_unit: first.time_unit,
        real_accumulated_time: mean(&real) * scale,
        cpu_accumulated_time: mean(&cpu) * scale,
        manual_accumulated_time: mean(&manual) * scale,
        bytes_per_second: mean(&bytes),
        items_per_second: mean(&items),
        bytes_per_manual_second: mean(&manual_bytes),
        items_per_manual_second: mean(&manual_items),
        both_manual_and_real_time: first.both_manual_and_real_time,
        report_label: shared_label(runs),
    };

    let stddev_run = Run {
        iterations: 0,
        real_accumulated_time: sample_std_dev(&real),
        cpu_accumulated_time: sample_std_dev(&cpu),
        manual_accumulated_time: sample_std_dev(&manual),
        bytes_per_second: sample_std_dev(&bytes),
        items_per_second: sample_std_dev(&items),
        bytes_per_manual_second: sample_std_dev(&manual_bytes),
        items_per_manual_second: sample_std_dev(&manual_items),
        ..mean_run.clone()
    };

    Ok((mean_run, stddev_run))
}

fn shared_label(runs: &[Run]) -> String {
    let first = &runs[0].report_label;
    if runs.iter().all(|r| &r.report_label == first) {
        first.clone()
    } else {
        String::new()
    }
}

fn field(runs: &[Run], value: impl Fn(&Run) -> f64) -> Vec<f64> {
    runs.iter().map(value).collect()
}

fn per_iteration(runs: &[Run], accumulated: impl Fn(&Run) -> f64) -> Vec<f64> {
    runs.iter()
        .map(|r| accumulated(r) / r.iterations.max(1) as f64)
        .collect()
}
