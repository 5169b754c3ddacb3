//! Execution Context Detection
//!
//! Builds the [`ExecutionContext`] when the session input does not carry one.
//!
//! ## Collected Data
//!
//! - **CPU count**: available parallelism
//! - **CPU frequency**: `cpu MHz` from `/proc/cpuinfo`
//! - **Frequency scaling**: any `cpufreq/scaling_governor` other than `performance`
//! - **Manual time**: any run with non-zero manual accumulated time
//! - **Name width**: longest benchmark name, floored by the configured minimum
//!
//! Linux-specific data gracefully degrades on other platforms, reporting
//! 0 MHz and no scaling.

use crate::config::BenchtableConfig;
use benchtable_report::{ExecutionContext, Run};

/// Build the execution context for a set of batches
pub fn detect_context(batches: &[Vec<Run>], config: &BenchtableConfig) -> ExecutionContext {
    let overrides = &config.context;
    ExecutionContext {
        num_cpus: overrides.num_cpus.unwrap_or_else(num_cpus),
        mhz_per_cpu: overrides
            .mhz_per_cpu
            .or_else(cpu_mhz)
            .unwrap_or(0.0),
        cpu_scaling_enabled: overrides
            .cpu_scaling_enabled
            .unwrap_or_else(cpu_scaling_enabled),
        manual_time_used: manual_time_used(batches),
        name_field_width: name_field_width(batches, config.layout.min_name_width),
    }
}

/// Whether any run in the session reports manual time
pub fn manual_time_used(batches: &[Vec<Run>]) -> bool {
    batches.iter().flatten().any(Run::uses_manual_time)
}

/// Width of the name column: the longest benchmark name, at least `min_width`
pub fn name_field_width(batches: &[Vec<Run>], min_width: usize) -> usize {
    batches
        .iter()
        .flatten()
        .map(|r| r.benchmark_name.chars().count())
        .fold(min_width, usize::max)
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

/// Get the CPU clock from /proc/cpuinfo (Linux only)
fn cpu_mhz() -> Option<f64> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| parse_cpu_mhz(&content))
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_cpu_mhz(cpuinfo: &str) -> Option<f64> {
    cpuinfo
        .lines()
        .find(|l| l.starts_with("cpu MHz"))
        .and_then(|l| l.split(':').nth(1))
        .and_then(|s| s.trim().parse::<f64>().ok())
}

/// Check the cpufreq governors (Linux only)
fn cpu_scaling_enabled() -> bool {
    #[cfg(target_os = "linux")]
    {
        let Ok(entries) = std::fs::read_dir("/sys/devices/system/cpu") else {
            return false;
        };
        entries
            .filter_map(Result::ok)
            .filter(|e| is_cpu_dir(&e.file_name().to_string_lossy()))
            .filter_map(|e| {
                std::fs::read_to_string(e.path().join("cpufreq/scaling_governor")).ok()
            })
            .any(|governor| governor.trim() != "performance")
    }
    #[cfg(not(target_os = "linux"))]
    {
        false
    }
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn is_cpu_dir(name: &str) -> bool {
    name.strip_prefix("cpu")
        .is_some_and(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
}
