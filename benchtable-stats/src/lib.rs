#![warn(missing_docs)]
//! benchtable Statistics
//!
//! Aggregates a batch of repeated runs of one benchmark into two synthesized
//! runs: the arithmetic mean and the sample standard deviation.

mod aggregate;
mod summary;

pub use aggregate::{StatsError, compute_stats};
pub use summary::{mean, sample_std_dev};

/// Fewest runs a batch needs before aggregates are computed
pub const MIN_AGGREGATE_RUNS: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MIN_AGGREGATE_RUNS, 2);
    }
}
