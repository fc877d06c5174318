//! Metric Comparator
//!
//! Decides which of two homologous values (same metric, two cities or
//! quarters) performs better under a per-metric directionality policy.

use serde::{Deserialize, Serialize};

use crate::schema::MetricValue;
use crate::utils::normalization::{has_data, parse_metric};

/// Outcome of comparing side A against side B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
    #[serde(rename = "equal")]
    Equal,
    /// One side has no data or is not numeric; no winner is declared
    #[serde(rename = "none")]
    Incomparable,
}

impl Winner {
    /// The result seen from the other side
    pub fn swapped(self) -> Self {
        match self {
            Winner::A => Winner::B,
            Winner::B => Winner::A,
            other => other,
        }
    }

    pub fn is_decided(self) -> bool {
        matches!(self, Winner::A | Winner::B)
    }
}

/// Which direction counts as favourable for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directionality {
    /// Green space, tree count, DF, sDA, UDI
    HigherIsBetter,
    /// Building coverage
    LowerIsBetter,
    /// Building intensity, average floors: compared for display only
    Neutral,
}

impl Directionality {
    /// Flag passed to [`compare_metric`]. Neutral metrics are ordered high-to-low.
    pub fn higher_is_better(self) -> bool {
        !matches!(self, Directionality::LowerIsBetter)
    }

    /// Whether a "better" badge is meaningful for this metric
    pub fn shows_badge(self) -> bool {
        !matches!(self, Directionality::Neutral)
    }
}

/// Compare two raw metric values.
///
/// Missing or non-numeric input on either side gives [`Winner::Incomparable`];
/// a missing value is never treated as the worse one.
pub fn compare_metric(value_a: &MetricValue, value_b: &MetricValue, higher_is_better: bool) -> Winner {
    if !has_data(value_a) || !has_data(value_b) {
        return Winner::Incomparable;
    }

    match (parse_metric(value_a), parse_metric(value_b)) {
        (Some(a), Some(b)) => compare_numbers(a, b, higher_is_better),
        _ => Winner::Incomparable,
    }
}

/// Compare under a directionality policy
pub fn compare_with_policy(
    value_a: &MetricValue,
    value_b: &MetricValue,
    policy: Directionality,
) -> Winner {
    compare_metric(value_a, value_b, policy.higher_is_better())
}

fn compare_numbers(a: f64, b: f64, higher_is_better: bool) -> Winner {
    if a > b {
        if higher_is_better { Winner::A } else { Winner::B }
    } else if b > a {
        if higher_is_better { Winner::B } else { Winner::A }
    } else {
        Winner::Equal
    }
}

/// Relative difference of the larger value over the smaller, in percent
pub fn percent_difference(a: f64, b: f64) -> f64 {
    let (larger, smaller) = if a >= b { (a, b) } else { (b, a) };
    (larger - smaller).abs() / smaller * 100.0
}
