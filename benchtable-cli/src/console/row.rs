//! Row Formatting
//!
//! One run becomes one table line:
//!
//! ```text
//! <name padded to width> <real> <unit> [<manual> <unit>] <cpu> <unit> <iterations> [throughput...] [label]
//! ```
//!
//! The number of time columns follows the session layout, never the run, so
//! every row of a session has the same shape.

use super::ColumnLayout;
use super::color::{Color, ColorSink, Segment};
use benchtable_report::{Run, human_readable_number};
use std::io;

/// Build the colored segments of one table row, newline included
pub fn render_row(run: &Run, layout: &ColumnLayout) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(8);

    segments.push(Segment::new(
        Color::Green,
        format!(
            "{:<width$} ",
            run.benchmark_name,
            width = layout.name_field_width
        ),
    ));

    let (label, multiplier) = run.time_unit.info();
    let iters = run.iterations.max(1) as f64;
    let per_iteration = |accumulated: f64| accumulated * multiplier / iters;

    let times = if layout.manual_time_used {
        format!(
            "{:>10.0} {label} {:>10.0} {label} {:>10.0} {label} ",
            per_iteration(run.real_accumulated_time),
            per_iteration(run.manual_accumulated_time),
            per_iteration(run.cpu_accumulated_time),
        )
    } else {
        format!(
            "{:>10.0} {label} {:>10.0} {label} ",
            per_iteration(run.real_accumulated_time),
            per_iteration(run.cpu_accumulated_time),
        )
    };
    segments.push(Segment::new(Color::Yellow, times));
    segments.push(Segment::new(Color::Cyan, format!("{:>10}", run.iterations)));

    for column in throughput_columns(run) {
        segments.push(Segment::new(Color::Default, column));
    }

    if !run.report_label.is_empty() {
        segments.push(Segment::new(Color::Default, format!(" {}", run.report_label)));
    }

    segments.push(Segment::new(Color::Default, "\n"));
    segments
}

/// Write one run as a table row
pub fn print_run<S: ColorSink + ?Sized>(
    sink: &mut S,
    run: &Run,
    layout: &ColumnLayout,
) -> io::Result<()> {
    for segment in render_row(run, layout) {
        sink.emit(segment.color, format_args!("{}", segment.text))?;
    }
    Ok(())
}

/// Whether the real-time figure of a throughput family is shown.
///
/// A manual figure replaces the real one unless the run asks for both.
fn real_figure_visible(has_value: bool, has_manual: bool, both_manual_and_real: bool) -> bool {
    match (has_value, has_manual, both_manual_and_real) {
        (false, _, _) => false,
        (true, false, _) => true,
        (true, true, both) => both,
    }
}

/// Optional throughput columns, already padded, in table order
fn throughput_columns(run: &Run) -> Vec<String> {
    let both = run.both_manual_and_real_time;
    let has_bytes = run.bytes_per_second > 0.0;
    let has_items = run.items_per_second > 0.0;
    let has_manual_bytes = run.bytes_per_manual_second > 0.0;
    let has_manual_items = run.items_per_manual_second > 0.0;

    let mut columns = Vec::new();

    if real_figure_visible(has_bytes, has_manual_bytes, both) {
        let rate = format!(" {}B/s", human_readable_number(run.bytes_per_second));
        columns.push(format!(" {:>13}", rate));
    }

    if real_figure_visible(has_items, has_manual_items, both) {
        let items = format!(" {} items/s", human_readable_number(run.items_per_second));
        columns.push(format!(" {:>18}", items));
    }

    if has_manual_bytes {
        let rate = format!(
            " {}B/s (manual)",
            human_readable_number(run.bytes_per_manual_second)
        );
        columns.push(format!(" {:>13}", rate));
    }

    if has_manual_items {
        let items = format!(
            " {} items/s (manual)",
            human_readable_number(run.items_per_manual_second)
        );
        columns.push(format!(" {:>18}", items));
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtable_report::TimeUnit;

    fn layout(width: usize, manual: bool) -> ColumnLayout {
        ColumnLayout {
            name_field_width: width,
            manual_time_used: manual,
        }
    }

    fn line(run: &Run, layout: &ColumnLayout) -> String {
        render_row(run, layout)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    fn foo() -> Run {
        Run {
            iterations: 1000,
            time_unit: TimeUnit::Nanosecond,
            real_accumulated_time: 50_000.0,
            cpu_accumulated_time: 48_000.0,
            ..Run::new("BM_Foo")
        }
    }

    #[test]
    fn test_two_time_columns() {
        let text = line(&foo(), &layout(10, false));

        assert_eq!(
            text,
            "BM_Foo             50 ns         48 ns       1000\n"
        );
    }

    #[test]
    fn test_three_time_columns_from_session_flag() {
        let mut run = foo();
        run.manual_accumulated_time = 45_000.0;
        let text = line(&run, &layout(10, true));

        assert_eq!(
            text,
            "BM_Foo             50 ns         45 ns         48 ns       1000\n"
        );

        // The run's own manual figure never adds a column
        let text = line(&run, &layout(10, false));
        assert_eq!(text.matches(" ns").count(), 2);
    }

    #[test]
    fn test_segment_colors() {
        let segments = render_row(&foo(), &layout(10, false));
        let colors: Vec<Color> = segments.iter().map(|s| s.color).collect();

        assert_eq!(
            colors,
            vec![Color::Green, Color::Yellow, Color::Cyan, Color::Default]
        );
    }

    #[test]
    fn test_zero_iterations_divide_by_one() {
        let run = Run {
            iterations: 0,
            real_accumulated_time: 7.0,
            cpu_accumulated_time: 3.0,
            ..Run::new("BM_Zero")
        };
        let text = line(&run, &layout(7, false));

        assert_eq!(text, "BM_Zero          7 ns          3 ns          0\n");
    }

    #[test]
    fn test_unit_scaling() {
        let run = Run {
            iterations: 10,
            time_unit: TimeUnit::Millisecond,
            real_accumulated_time: 20_000_000.0,
            cpu_accumulated_time: 10_000_000.0,
            ..Run::new("BM_Slow")
        };
        let text = line(&run, &layout(7, false));

        assert!(text.contains("         2 ms "));
        assert!(text.contains("         1 ms "));
    }

    #[test]
    fn test_long_name_shifts_columns() {
        let run = Run::new("BM_AVeryLongBenchmarkName");
        let text = line(&run, &layout(4, false));

        assert!(text.starts_with("BM_AVeryLongBenchmarkName          0 ns"));
    }

    #[test]
    fn test_bytes_only() {
        let mut run = foo();
        run.bytes_per_second = 500_000.0;
        let text = line(&run, &layout(10, false));

        assert!(text.ends_with("      1000       500kB/s\n"));
        assert!(!text.contains("items/s"));
    }

    #[test]
    fn test_no_bytes_column_when_zero() {
        let mut run = foo();
        run.items_per_second = 2_500.0;
        let text = line(&run, &layout(10, false));

        assert!(!text.contains("B/s"));
        assert!(text.ends_with("      1000       2.5k items/s\n"));
    }

    #[test]
    fn test_manual_replaces_real_figure() {
        let mut run = foo();
        run.bytes_per_second = 1_000.0;
        run.bytes_per_manual_second = 2_000.0;
        run.items_per_second = 3_000.0;
        let text = line(&run, &layout(10, false));

        // Bytes family is replaced, items family is independent
        assert!(!text.contains(" 1kB/s"));
        assert!(text.contains(" 2kB/s (manual)"));
        assert!(text.contains(" 3k items/s"));
    }

    #[test]
    fn test_manual_and_real_side_by_side() {
        let mut run = foo();
        run.bytes_per_second = 1_000.0;
        run.bytes_per_manual_second = 2_000.0;
        run.items_per_second = 3_000.0;
        run.items_per_manual_second = 4_000.0;
        run.both_manual_and_real_time = true;
        let text = line(&run, &layout(10, false));

        let order = [" 1kB/s", " 3k items/s", " 2kB/s (manual)", " 4k items/s (manual)"];
        let positions: Vec<usize> = order.iter().map(|p| text.find(p).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_visibility_table() {
        assert!(!real_figure_visible(false, false, false));
        assert!(!real_figure_visible(false, true, true));
        assert!(real_figure_visible(true, false, false));
        assert!(real_figure_visible(true, false, true));
        assert!(!real_figure_visible(true, true, false));
        assert!(real_figure_visible(true, true, true));
    }

    #[test]
    fn test_label_appended() {
        let mut run = foo();
        run.report_label = "hot cache".to_string();
        let text = line(&run, &layout(10, false));

        assert!(text.ends_with("      1000 hot cache\n"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut run = foo();
        run.items_per_second = 123_456.0;
        let layout = layout(12, true);

        assert_eq!(render_row(&run, &layout), render_row(&run, &layout));
    }

    #[test]
    fn test_print_run_matches_render() {
        let run = foo();
        let layout = layout(10, false);
        let mut sink = super::super::CaptureSink::new();
        print_run(&mut sink, &run, &layout).unwrap();

        assert_eq!(sink.segments(), render_row(&run, &layout).as_slice());
    }
}
