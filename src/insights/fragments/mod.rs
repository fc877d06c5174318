//! Insight rule families
//!
//! Each family is a pure function of two cities (and their representative
//! quarters). A rule whose operands lack data on either side emits nothing.

pub mod urban_form;
pub mod daylight;
pub mod morphology;

pub use urban_form::generate_urban_form_insights;
pub use daylight::generate_daylight_insights;
pub use morphology::generate_urban_morphology_insights;

use crate::schema::MetricValue;
use crate::utils::normalization::parse_metric;

/// Numeric value that is present and non-zero
pub(crate) fn nonzero_metric(value: &MetricValue) -> Option<f64> {
    parse_metric(value).filter(|n| *n != 0.0)
}

/// Two named values ordered high to low
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ranked<'a> {
    pub higher_name: &'a str,
    pub higher: f64,
    pub lower_name: &'a str,
    pub lower: f64,
}

impl<'a> Ranked<'a> {
    /// `None` when either value is missing or both are equal
    pub fn of(name_a: &'a str, a: Option<f64>, name_b: &'a str, b: Option<f64>) -> Option<Self> {
        let (a, b) = (a?, b?);
        if a > b {
            Some(Self { higher_name: name_a, higher: a, lower_name: name_b, lower: b })
        } else if b > a {
            Some(Self { higher_name: name_b, higher: b, lower_name: name_a, lower: a })
        } else {
            None
        }
    }

    /// Percentage-point gap
    pub fn point_difference(&self) -> f64 {
        self.higher - self.lower
    }

    /// Gap relative to the lower value, in percent
    pub fn relative_difference(&self) -> f64 {
        crate::comparison::percent_difference(self.higher, self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ranked_orders_either_way() {
        let r = Ranked::of("A", Some(2.0), "B", Some(3.0)).unwrap();
        assert_eq!(r.higher_name, "B");
        assert_eq!(r.lower_name, "A");
        assert_relative_eq!(r.relative_difference(), 50.0);
        assert_relative_eq!(r.point_difference(), 1.0);
    }

    #[test]
    fn test_ranked_none_on_tie_or_missing() {
        assert!(Ranked::of("A", Some(2.0), "B", Some(2.0)).is_none());
        assert!(Ranked::of("A", None, "B", Some(2.0)).is_none());
    }

    #[test]
    fn test_nonzero_metric() {
        assert_eq!(nonzero_metric(&0.into()), None);
        assert_eq!(nonzero_metric(&"0".into()), None);
        assert_eq!(nonzero_metric(&"1.5".into()), Some(1.5));
        assert_eq!(nonzero_metric(&MetricValue::Absent), None);
    }
}
