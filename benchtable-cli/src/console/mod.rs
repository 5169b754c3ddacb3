//! Console Reporter
//!
//! Prints benchmark runs as a fixed-column terminal table.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionContext (once per session)
//!       │
//!       ▼
//! ┌─────────────┐
//! │   header    │  Machine banner (stderr), column header + divider (stdout)
//! └──────┬──────┘
//!        │  ColumnLayout (name width, manual-time mode)
//!        ▼
//! ┌─────────────┐
//! │    batch    │  Identity check, one row per run, mean/stddev rows
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │     row     │  Time columns, iterations, throughput, label
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`color`] - Color sinks (terminal and in-memory capture)
//! - [`header`] - Context banner and column header
//! - [`batch`] - Per-benchmark batch rendering and aggregates
//! - [`row`] - Single row formatting

mod batch;
mod color;
mod header;
mod row;

pub use color::{CaptureSink, Color, ColorSink, Segment, TerminalSink};
pub use header::header_row;
pub use row::{print_run, render_row};

use benchtable_report::local_date_time_string;
use benchtable_stats::StatsError;
use std::io::{self, Write};
use thiserror::Error;

/// Errors raised while printing the table
#[derive(Debug, Error)]
pub enum ReportError {
    /// A batch mixed runs of different benchmarks
    #[error("Inconsistent batch: expected runs of '{expected}', found '{found}'")]
    InconsistentBatch { expected: String, found: String },

    #[error("Runs reported before the execution context")]
    ContextNotReported,

    #[error("Execution context already reported")]
    ContextAlreadyReported,

    #[error("Aggregate computation failed: {0}")]
    Stats(#[from] StatsError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Column layout fixed by the header and reused for every row of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Minimum width of the benchmark name column
    pub name_field_width: usize,
    /// Print the manual time column between real and CPU time
    pub manual_time_used: bool,
}

/// Console table reporter.
///
/// Table text goes to a [`ColorSink`]; the machine banner and warnings go to
/// a separate diagnostic writer.
pub struct ConsoleReporter<S, E> {
    sink: S,
    diagnostics: E,
    layout: Option<ColumnLayout>,
    clock: fn() -> String,
}

impl ConsoleReporter<TerminalSink<io::Stdout>, io::Stderr> {
    /// Reporter writing the table to stdout and diagnostics to stderr
    pub fn stdio() -> Self {
        Self::new(TerminalSink::stdout(), io::stderr())
    }
}

impl<S: ColorSink, E: Write> ConsoleReporter<S, E> {
    /// Create a reporter over a table sink and a diagnostic writer
    pub fn new(sink: S, diagnostics: E) -> Self {
        Self {
            sink,
            diagnostics,
            layout: None,
            clock: local_date_time_string,
        }
    }

    /// Replace the timestamp source used by the header
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    /// Layout recorded by [`report_context`](Self::report_context), if any
    pub fn layout(&self) -> Option<ColumnLayout> {
        self.layout
    }

    /// Table sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Diagnostic writer
    pub fn diagnostics(&self) -> &E {
        &self.diagnostics
    }

    /// Split the reporter into its sink and diagnostic writer
    pub fn into_parts(self) -> (S, E) {
        (self.sink, self.diagnostics)
    }
}
