//! Context Header
//!
//! Printed once per session, before any row.

use super::{Color, ColorSink, ColumnLayout, ConsoleReporter, ReportError};
use benchtable_report::{ExecutionContext, format_significant};
use std::io::Write;
use tracing::debug;

const CPU_SCALING_WARNING: &str = "***WARNING*** CPU scaling is enabled, the benchmark real time \
                                   measurements may be noisy and will incur extra overhead.";

/// Significant digits of the CPU clock in the banner
const MHZ_DIGITS: usize = 6;

#[cfg(debug_assertions)]
const DEBUG_BUILD_WARNING: &str =
    "***WARNING*** Library was built as DEBUG. Timings may be affected.";

/// Column header row for a layout, without trailing newline
pub fn header_row(layout: &ColumnLayout) -> String {
    let width = layout.name_field_width;
    if layout.manual_time_used {
        format!(
            "{:<width$} {:>13} {:>13} {:>13} {:>10}",
            "Benchmark", "Real time", "Manual time", "CPU", "Iterations"
        )
    } else {
        format!(
            "{:<width$} {:>13} {:>13} {:>10}",
            "Benchmark", "Time", "CPU", "Iterations"
        )
    }
}

impl<S: ColorSink, E: Write> ConsoleReporter<S, E> {
    /// Print the machine banner and the column header.
    ///
    /// Fixes the [`ColumnLayout`] used by every later row. May only be called
    /// once per reporter.
    pub fn report_context(
        &mut self,
        context: &ExecutionContext,
    ) -> Result<ColumnLayout, ReportError> {
        if self.layout.is_some() {
            return Err(ReportError::ContextAlreadyReported);
        }

        let plural = if context.num_cpus > 1 { "s" } else { "" };
        writeln!(
            self.diagnostics,
            "Run on ({} X {} MHz CPU{})",
            context.num_cpus,
            format_significant(context.mhz_per_cpu, MHZ_DIGITS),
            plural
        )?;
        writeln!(self.diagnostics, "{}", (self.clock)())?;

        if context.cpu_scaling_enabled {
            writeln!(self.diagnostics, "{}", CPU_SCALING_WARNING)?;
        }

        #[cfg(debug_assertions)]
        writeln!(self.diagnostics, "{}", DEBUG_BUILD_WARNING)?;

        let layout = ColumnLayout {
            name_field_width: context.name_field_width,
            manual_time_used: context.manual_time_used,
        };

        let header = header_row(&layout);
        let divider = "-".repeat(header.chars().count());
        self.sink.emit(Color::Default, format_args!("{}\n", header))?;
        self.sink.emit(Color::Default, format_args!("{}\n", divider))?;
        self.sink.flush()?;
        self.diagnostics.flush()?;

        debug!(
            name_field_width = layout.name_field_width,
            manual_time_used = layout.manual_time_used,
            "Column layout fixed"
        );

        self.layout = Some(layout);
        Ok(layout)
    }
}
