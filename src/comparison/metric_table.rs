//! Side-by-side metric rows for the comparison view.

use serde::{Deserialize, Serialize};

use crate::comparison::comparator::{compare_with_policy, Directionality, Winner};
use crate::schema::{City, DaylightMetric, MetricValue, Quarter, Scenario};
use crate::utils::normalization::{format_metric_value, has_data};

/// One labelled metric shown for both sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub label: String,
    pub unit: Option<String>,
    pub value_a: String,
    pub value_b: String,
    pub has_a: bool,
    pub has_b: bool,
    pub policy: Directionality,
    pub winner: Winner,
    /// True when the winning side should carry a "better" badge
    pub badge: bool,
}

impl MetricRow {
    pub fn build(
        label: &str,
        unit: Option<&str>,
        value_a: &MetricValue,
        value_b: &MetricValue,
        policy: Directionality,
    ) -> Self {
        let winner = compare_with_policy(value_a, value_b, policy);
        MetricRow {
            label: label.to_string(),
            unit: unit.map(str::to_string),
            value_a: format_metric_value(value_a),
            value_b: format_metric_value(value_b),
            has_a: has_data(value_a),
            has_b: has_data(value_b),
            policy,
            winner,
            badge: policy.shows_badge() && winner.is_decided(),
        }
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSection {
    pub title: String,
    pub rows: Vec<MetricRow>,
}

/// City-level urban indicators
pub fn urban_indicator_section(city_a: &City, city_b: &City) -> MetricSection {
    let a = &city_a.urban_indicators;
    let b = &city_b.urban_indicators;

    MetricSection {
        title: "Urban Indicators".to_string(),
        rows: vec![
            MetricRow::build(
                "Building Intensity",
                None,
                &a.building_intensity,
                &b.building_intensity,
                Directionality::Neutral,
            ),
            MetricRow::build(
                "Green Space",
                Some("%"),
                &a.green_space_percentage,
                &b.green_space_percentage,
                Directionality::HigherIsBetter,
            ),
        ],
    }
}

/// Indicators of the representative quarters
pub fn quarter_indicator_section(quarter_a: &Quarter, quarter_b: &Quarter) -> MetricSection {
    let a = &quarter_a.indicators;
    let b = &quarter_b.indicators;

    MetricSection {
        title: "Quarter Indicators".to_string(),
        rows: vec![
            MetricRow::build("Average Floors", None, &a.avg_floors, &b.avg_floors, Directionality::Neutral),
            MetricRow::build(
                "Building Coverage",
                Some("%"),
                &a.building_coverage,
                &b.building_coverage,
                Directionality::LowerIsBetter,
            ),
            MetricRow::build("Tree Count", None, &a.tree_count, &b.tree_count, Directionality::HigherIsBetter),
        ],
    }
}

/// Worst-case simulation results; a metric is listed only when either quarter carries it
pub fn daylight_section(quarter_a: &Quarter, quarter_b: &Quarter) -> MetricSection {
    let rows = DaylightMetric::ALL
        .into_iter()
        .filter(|metric| quarter_a.simulation(*metric).is_some() || quarter_b.simulation(*metric).is_some())
        .map(|metric| {
            MetricRow::build(
                daylight_row_label(metric),
                Some("%"),
                quarter_a.simulated_value(metric, Scenario::WorstCase),
                quarter_b.simulated_value(metric, Scenario::WorstCase),
                Directionality::HigherIsBetter,
            )
        })
        .collect();

    MetricSection {
        title: "Daylight Performance".to_string(),
        rows,
    }
}

fn daylight_row_label(metric: DaylightMetric) -> &'static str {
    match metric {
        DaylightMetric::DaylightFactor => "Average DF",
        DaylightMetric::SpatialDaylightAutonomy => "sDA Value",
        DaylightMetric::UsefulDaylightIlluminance => "Average UDI",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SimulationBundle, SimulationData};

    fn quarter_with_floors(floors: f64, coverage: &str) -> Quarter {
        let mut q = Quarter {
            id: 1,
            name: "Q".into(),
            ..Default::default()
        };
        q.indicators.avg_floors = floors.into();
        q.indicators.building_coverage = coverage.into();
        q
    }

    #[test]
    fn test_neutral_row_has_no_badge() {
        let row = MetricRow::build("Average Floors", None, &8.0.into(), &4.0.into(), Directionality::Neutral);
        assert_eq!(row.winner, Winner::A);
        assert!(!row.badge);
        assert_eq!(row.value_a, "8.00");
    }

    #[test]
    fn test_missing_side_formats_no_data() {
        let row = MetricRow::build(
            "Green Space",
            Some("%"),
            &MetricValue::Absent,
            &25.0.into(),
            Directionality::HigherIsBetter,
        );
        assert_eq!(row.value_a, "No data");
        assert!(!row.has_a);
        assert_eq!(row.winner, Winner::Incomparable);
        assert!(!row.badge);
    }

    #[test]
    fn test_quarter_section_coverage_lower_wins() {
        let section = quarter_indicator_section(&quarter_with_floors(6.0, "40%"), &quarter_with_floors(5.0, "55%"));
        let coverage = &section.rows[1];
        assert_eq!(coverage.label, "Building Coverage");
        assert_eq!(coverage.winner, Winner::A);
        assert!(coverage.badge);
        assert_eq!(coverage.value_b, "55%");
    }

    #[test]
    fn test_daylight_section_lists_only_present_bundles() {
        let mut a = quarter_with_floors(5.0, "30");
        a.daylight_factor = Some(SimulationBundle {
            simulation1: SimulationData {
                avg_value: 2.1.into(),
                ..Default::default()
            },
            ..Default::default()
        });
        let b = quarter_with_floors(5.0, "30");

        let section = daylight_section(&a, &b);
        assert_eq!(section.rows.len(), 1);
        assert_eq!(section.rows[0].label, "Average DF");
        assert_eq!(section.rows[0].value_b, "No data");
        assert_eq!(section.rows[0].winner, Winner::Incomparable);
    }
}
