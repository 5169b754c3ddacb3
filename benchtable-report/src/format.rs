//! Formatting Helpers
//!
//! Human-readable scaling for throughput figures and the timestamp line of
//! the console header.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

const SUFFIXES: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

/// Scale a count or rate into a compact string with a base-1000 suffix.
///
/// At most two decimals are kept and trailing zeros are dropped:
/// `500000.0` becomes `"500k"`, `1234567.0` becomes `"1.23M"`.
pub fn human_readable_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut scaled = value;
    let mut exponent = 0;
    while scaled.abs() >= 1000.0 && exponent < SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        exponent += 1;
    }

    let mut mantissa = format!("{:.2}", scaled);
    trim_fraction(&mut mantissa);
    if mantissa == "-0" {
        mantissa = "0".to_string();
    }

    format!("{}{}", mantissa, SUFFIXES[exponent])
}

/// Print a value with at most `digits` significant digits, trailing zeros
/// dropped: `2400.123456` with 6 digits becomes `"2400.12"`.
///
/// Values too large for that many integral digits keep every integral digit.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    let mut text = format!("{:.*}", decimals, value);
    trim_fraction(&mut text);
    text
}

fn trim_fraction(text: &mut String) {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
}

/// Format a timestamp the way the console header prints it
pub fn format_date_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current local date and time
pub fn local_date_time_string() -> String {
    format_date_time(&Local::now())
}
