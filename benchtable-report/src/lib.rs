#![warn(missing_docs)]
//! benchtable Report Model
//!
//! Shared data for the console reporter:
//! - `Run` records produced by the benchmark harness (and synthesized aggregates)
//! - The one-time `ExecutionContext` describing the machine
//! - Time unit lookup (label + multiplier)
//! - Human-readable number scaling and local timestamp formatting

mod format;
mod model;

pub use format::{
    format_date_time, format_significant, human_readable_number, local_date_time_string,
};
pub use model::{ExecutionContext, Run, TimeUnit};

/// Minimum width of the benchmark name column
pub const MIN_NAME_FIELD_WIDTH: usize = 10;
