//! Raw indicator values as they appear in the city document.
//!
//! A metric may be a number, free text ("42%", "3-5 floors"), a boolean, or
//! absent. Absence covers JSON `null`, a missing field, and the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single observed or simulated indicator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// `null` or a missing field
    #[default]
    Absent,
    Number(f64),
    Text(String),
    /// Booleans are data, not absence
    Flag(bool),
}

impl MetricValue {
    /// True for `Absent` and for empty text.
    pub fn is_absent(&self) -> bool {
        match self {
            MetricValue::Absent => true,
            MetricValue::Text(s) => s.is_empty(),
            MetricValue::Number(_) | MetricValue::Flag(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<i32> for MetricValue {
    fn from(value: i32) -> Self {
        MetricValue::Number(f64::from(value))
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Flag(value)
    }
}

impl<T: Into<MetricValue>> From<Option<T>> for MetricValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(MetricValue::Absent, Into::into)
    }
}

/// Raw textual form, without the two-decimal number formatting used for display.
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Absent => Ok(()),
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default)]
        value: MetricValue,
    }

    fn parse(json: &str) -> MetricValue {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[test]
    fn test_deserialize_variants() {
        assert_eq!(parse(r#"{"value": 12}"#), MetricValue::Number(12.0));
        assert_eq!(parse(r#"{"value": 3.5}"#), MetricValue::Number(3.5));
        assert_eq!(parse(r#"{"value": "42%"}"#), MetricValue::Text("42%".to_string()));
        assert_eq!(parse(r#"{"value": false}"#), MetricValue::Flag(false));
        assert_eq!(parse(r#"{"value": null}"#), MetricValue::Absent);
        assert_eq!(parse(r#"{}"#), MetricValue::Absent);
    }

    #[test]
    fn test_absence() {
        assert!(MetricValue::Absent.is_absent());
        assert!(MetricValue::from("").is_absent());
        assert!(!MetricValue::from(0.0).is_absent());
        assert!(!MetricValue::from("0").is_absent());
        assert!(!MetricValue::from(false).is_absent());
    }

    #[test]
    fn test_serialize_absent_as_null() {
        let json = serde_json::to_string(&MetricValue::Absent).unwrap();
        assert_eq!(json, "null");
    }
}
