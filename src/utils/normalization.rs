//! Value Normalization Utilities
//!
//! Presence checks, numeric parsing and display formatting shared by the
//! comparison engine, the insight fragments and the report builder.
//!
//! `0`, `"0"` and `false` are data. Only `null`, a missing field and `""`
//! count as "no data", so callers must go through [`has_data`] instead of
//! testing truthiness.

use crate::schema::MetricValue;

/// Text shown in place of a missing value
pub const NO_DATA: &str = "No data";

/// Digits inspected past the rounding position when detecting an exact tie
const TIE_PROBE_DIGITS: usize = 30;

/// Anything that can be "present" or "absent" in the city document
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for MetricValue {
    fn is_present(&self) -> bool {
        !self.is_absent()
    }
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().map_or(false, Presence::is_present)
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// False iff the value is null, missing, or the empty string.
pub fn has_data<T: Presence + ?Sized>(value: &T) -> bool {
    value.is_present()
}

/// Format a metric for display.
///
/// - no data → `"No data"`
/// - numbers → exactly two decimals (`3` → `"3.00"`)
/// - text and booleans → unchanged
pub fn format_metric_value(value: &MetricValue) -> String {
    if !has_data(value) {
        return NO_DATA.to_string();
    }
    match value {
        MetricValue::Number(n) => to_fixed(*n, 2),
        other => other.to_string(),
    }
}

/// Fixed-point formatting with exact ties rounded away from zero.
///
/// Never uses locale separators: the decimal mark is always `.`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let expanded = format!("{:.*}", digits + TIE_PROBE_DIGITS, value);
    let tail = &expanded[expanded.len() - TIE_PROBE_DIGITS..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    // value == (n + 0.5) / 10^digits exactly, so the scaled product is exact too
    let scale = 10f64.powi(digits as i32);
    let away = ((value.abs() * scale).floor() + 1.0) / scale;
    format!("{:.*}", digits, away.copysign(value))
}

/// Round to the nearest integer and render without decimals.
pub fn format_rounded(value: f64) -> String {
    to_fixed(value, 0)
}

/// Render a number the way it appears in source data (`45` not `45.00`).
pub fn display_number(value: f64) -> String {
    format!("{}", value)
}

/// Numeric reading of a metric.
///
/// Text is parsed from its leading numeric prefix (`"42%"` → 42). Absent values,
/// booleans and text without a numeric prefix yield `None`.
pub fn parse_metric(value: &MetricValue) -> Option<f64> {
    match value {
        MetricValue::Number(n) if n.is_finite() => Some(*n),
        MetricValue::Text(s) => parse_leading_float(s),
        _ => None,
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Trailing units or words are ignored. Non-finite results are rejected.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let scan_digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = scan_digits(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = scan_digits(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}
