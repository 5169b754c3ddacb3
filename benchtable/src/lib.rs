#![warn(missing_docs)]
//! # benchtable
//!
//! Fixed-column console tables for repeated benchmark runs.
//!
//! benchtable prints what a benchmark harness measured:
//! - **Context header**: CPU count and clock, timestamp, scaling and debug-build warnings
//! - **Column layout**: name column sized to the longest benchmark, two or three
//!   time columns depending on whether any benchmark uses manual timing
//! - **Rows**: per-iteration times, iteration count, human-readable throughput, labels
//! - **Aggregates**: mean and standard deviation rows after repeated runs
//!
//! ## Quick Start
//!
//! ```ignore
//! use benchtable::prelude::*;
//!
//! let mut reporter = ConsoleReporter::stdio();
//! reporter.report_context(&ExecutionContext {
//!     num_cpus: 4,
//!     mhz_per_cpu: 2400.0,
//!     cpu_scaling_enabled: false,
//!     manual_time_used: false,
//!     name_field_width: 10,
//! })?;
//! reporter.report_runs(&runs)?;
//! ```

// Re-export report model
pub use benchtable_report::{
    ExecutionContext, MIN_NAME_FIELD_WIDTH, Run, TimeUnit, format_date_time, format_significant,
    human_readable_number, local_date_time_string,
};

// Re-export stats
pub use benchtable_stats::{StatsError, compute_stats, mean, sample_std_dev};

// Re-export reporter and CLI
pub use benchtable_cli::{
    BenchtableConfig, CaptureSink, Cli, Color, ColorChoice, ColorSink, ColumnLayout,
    ConsoleReporter, InputError, ReportError, Segment, Session, TerminalSink, detect_context,
    render_session,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ColorSink, ConsoleReporter, ExecutionContext, Run, TimeUnit};
}

/// Run the benchtable CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     benchtable::run()
/// }
/// ```
pub use benchtable_cli::run;
