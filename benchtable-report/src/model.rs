//! Run and Context Data Structures

use serde::{Deserialize, Serialize};

/// Display unit for per-iteration times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Nanoseconds (`ns`)
    #[default]
    #[serde(alias = "ns")]
    Nanosecond,
    /// Microseconds (`us`)
    #[serde(alias = "us")]
    Microsecond,
    /// Milliseconds (`ms`)
    #[serde(alias = "ms")]
    Millisecond,
    /// Seconds (`s`)
    #[serde(alias = "s")]
    Second,
}

impl TimeUnit {
    /// Label and multiplier for this unit.
    ///
    /// Accumulated times are stored in nanoseconds; multiplying by the
    /// returned factor converts them into this unit.
    pub fn info(self) -> (&'static str, f64) {
        match self {
            TimeUnit::Nanosecond => ("ns", 1.0),
            TimeUnit::Microsecond => ("us", 1e-3),
            TimeUnit::Millisecond => ("ms", 1e-6),
            TimeUnit::Second => ("s", 1e-9),
        }
    }

    /// Short label printed after each time column
    pub fn label(self) -> &'static str {
        self.info().0
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ns" | "nanosecond" => Ok(TimeUnit::Nanosecond),
            "us" | "µs" | "microsecond" => Ok(TimeUnit::Microsecond),
            "ms" | "millisecond" => Ok(TimeUnit::Millisecond),
            "s" | "second" => Ok(TimeUnit::Second),
            other => Err(format!("Unknown time unit: {}", other)),
        }
    }
}

/// One completed benchmark repetition, or a synthesized aggregate.
///
/// Throughput fields use `0.0` for "not applicable"; the reporter omits
/// the matching column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    pub benchmark_name: String,
    pub iterations: u64,
    pub time_unit: TimeUnit,
    /// Accumulated wall time in nanoseconds
    pub real_accumulated_time: f64,
    /// Accumulated CPU time in nanoseconds
    pub cpu_accumulated_time: f64,
    /// Accumulated user-supplied time in nanoseconds
    pub manual_accumulated_time: f64,
    pub bytes_per_second: f64,
    pub items_per_second: f64,
    pub bytes_per_manual_second: f64,
    pub items_per_manual_second: f64,
    /// Show real-time throughput next to the manual figure instead of replacing it
    pub both_manual_and_real_time: bool,
    pub report_label: String,
}

impl Run {
    /// Create an empty run for the given benchmark
    pub fn new(benchmark_name: impl Into<String>) -> Self {
        Self {
            benchmark_name: benchmark_name.into(),
            ..Self::default()
        }
    }

    /// Whether this run recorded any manual time
    pub fn uses_manual_time(&self) -> bool {
        self.manual_accumulated_time > 0.0
    }
}

/// Machine and session description, supplied once before any run is reported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub num_cpus: u32,
    pub mhz_per_cpu: f64,
    #[serde(default)]
    pub cpu_scaling_enabled: bool,
    /// Any benchmark in the session reports manual time
    #[serde(default)]
    pub manual_time_used: bool,
    /// Minimum width of the name column (longest benchmark name)
    #[serde(default = "default_name_field_width")]
    pub name_field_width: usize,
}

fn default_name_field_width() -> usize {
    crate::MIN_NAME_FIELD_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_unit_info() {
        assert_eq!(TimeUnit::Nanosecond.info(), ("ns", 1.0));
        assert_eq!(TimeUnit::Microsecond.info(), ("us", 1e-3));
        assert_eq!(TimeUnit::Millisecond.info(), ("ms", 1e-6));
        assert_eq!(TimeUnit::Second.label(), "s");
    }

    #[test]
    fn test_time_unit_from_str() {
        assert_eq!("ns".parse::<TimeUnit>().unwrap(), TimeUnit::Nanosecond);
        assert_eq!("Millisecond".parse::<TimeUnit>().unwrap(), TimeUnit::Millisecond);
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_run_defaults_from_partial_json() {
        let run: Run = serde_json::from_str(
            r#"{"benchmark_name": "BM_Foo", "iterations": 10, "time_unit": "us"}"#,
        )
        .unwrap();

        assert_eq!(run.benchmark_name, "BM_Foo");
        assert_eq!(run.time_unit, TimeUnit::Microsecond);
        assert_eq!(run.bytes_per_second, 0.0);
        assert!(run.report_label.is_empty());
        assert!(!run.uses_manual_time());
    }

    #[test]
    fn test_context_default_width() {
        let ctx: ExecutionContext =
            serde_json::from_str(r#"{"num_cpus": 8, "mhz_per_cpu": 3200.0}"#).unwrap();

        assert_eq!(ctx.name_field_width, 10);
        assert!(!ctx.manual_time_used);
        assert!(!ctx.cpu_scaling_enabled);
    }
}
