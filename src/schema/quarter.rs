//! Quarter records: one analysed urban block inside a city.

use serde::{Deserialize, Serialize};

use super::city::ShadingAnalysis;
use super::metric_value::MetricValue;

/// Morphology indicators measured for a quarter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuarterIndicators {
    pub building_intensity: MetricValue,
    pub green_space_ratio: MetricValue,
    /// Built footprint share (%)
    pub building_coverage: MetricValue,
    pub avg_floors: MetricValue,
    pub tree_count: MetricValue,
    pub height_to_width_ratio: MetricValue,
    pub street_width: MetricValue,
}

/// One simulation run: a rendered image plus its scalar result.
///
/// Daylight Factor and UDI runs report `avg_value`; sDA runs report `autonomy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationData {
    pub image: Option<String>,
    pub avg_value: MetricValue,
    pub autonomy: MetricValue,
    pub description: Option<String>,
}

/// Two simulated scenarios for one daylight metric.
///
/// `simulation1` is conventionally the worst case and `simulation2` the best case.
/// `interpretation` is only carried by sDA and UDI bundles, `conclusions` only by UDI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationBundle {
    pub simulation1: SimulationData,
    pub simulation2: SimulationData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusions: Option<String>,
}

/// Which of the two simulated scenarios to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// simulation1
    WorstCase,
    /// simulation2
    BestCase,
}

impl SimulationBundle {
    pub fn scenario(&self, scenario: Scenario) -> &SimulationData {
        match scenario {
            Scenario::WorstCase => &self.simulation1,
            Scenario::BestCase => &self.simulation2,
        }
    }
}

/// The three simulated daylight metrics a quarter may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaylightMetric {
    DaylightFactor,
    SpatialDaylightAutonomy,
    UsefulDaylightIlluminance,
}

impl DaylightMetric {
    pub const ALL: [DaylightMetric; 3] = [
        DaylightMetric::DaylightFactor,
        DaylightMetric::SpatialDaylightAutonomy,
        DaylightMetric::UsefulDaylightIlluminance,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            DaylightMetric::DaylightFactor => "DF",
            DaylightMetric::SpatialDaylightAutonomy => "sDA",
            DaylightMetric::UsefulDaylightIlluminance => "UDI",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DaylightMetric::DaylightFactor => "Daylight Factor",
            DaylightMetric::SpatialDaylightAutonomy => "Spatial Daylight Autonomy",
            DaylightMetric::UsefulDaylightIlluminance => "Useful Daylight Illuminance",
        }
    }

    /// The scenario scalar this metric reports (`autonomy` for sDA, `avg_value` otherwise)
    pub fn scalar<'a>(&self, run: &'a SimulationData) -> &'a MetricValue {
        match self {
            DaylightMetric::SpatialDaylightAutonomy => &run.autonomy,
            DaylightMetric::DaylightFactor | DaylightMetric::UsefulDaylightIlluminance => {
                &run.avg_value
            }
        }
    }
}

/// An analysed quarter (urban block) of a city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quarter {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub form3d: Option<String>,
    /// Floor area ratio
    #[serde(default)]
    pub far: MetricValue,
    #[serde(default)]
    pub indicators: QuarterIndicators,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub sun_hours: Option<String>,
    #[serde(default)]
    pub daylight_potential: Option<String>,
    #[serde(default)]
    pub daylight_potential2: Option<String>,
    #[serde(default)]
    pub solar_energy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daylight_factor: Option<SimulationBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_daylight_autonomy: Option<SimulationBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useful_daylight_illuminance: Option<SimulationBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading_analysis: Option<ShadingAnalysis>,
}

impl Quarter {
    pub fn simulation(&self, metric: DaylightMetric) -> Option<&SimulationBundle> {
        match metric {
            DaylightMetric::DaylightFactor => self.daylight_factor.as_ref(),
            DaylightMetric::SpatialDaylightAutonomy => self.spatial_daylight_autonomy.as_ref(),
            DaylightMetric::UsefulDaylightIlluminance => self.useful_daylight_illuminance.as_ref(),
        }
    }

    /// Scalar result of one scenario, or `Absent` when the bundle is missing
    pub fn simulated_value(&self, metric: DaylightMetric, scenario: Scenario) -> &MetricValue {
        const ABSENT: &MetricValue = &MetricValue::Absent;
        self.simulation(metric)
            .map(|bundle| metric.scalar(bundle.scenario(scenario)))
            .unwrap_or(ABSENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_quarter() {
        let json = r#"{
            "id": 1,
            "name": "Block A",
            "indicators": { "avgFloors": 6, "buildingCoverage": "38%" },
            "spatialDaylightAutonomy": {
                "simulation1": { "image": "SDA_1", "autonomy": 54 },
                "simulation2": { "image": "SDA_2", "autonomy": 71 },
                "interpretation": null
            }
        }"#;
        let quarter: Quarter = serde_json::from_str(json).unwrap();

        assert_eq!(quarter.indicators.avg_floors, MetricValue::Number(6.0));
        assert_eq!(quarter.indicators.tree_count, MetricValue::Absent);
        assert!(quarter.daylight_factor.is_none());
        assert_eq!(
            quarter.simulated_value(DaylightMetric::SpatialDaylightAutonomy, Scenario::BestCase),
            &MetricValue::Number(71.0)
        );
        assert_eq!(
            quarter.simulated_value(DaylightMetric::DaylightFactor, Scenario::WorstCase),
            &MetricValue::Absent
        );
    }

    #[test]
    fn test_scalar_field_per_metric() {
        let run = SimulationData {
            image: None,
            avg_value: MetricValue::Number(2.4),
            autonomy: MetricValue::Number(60.0),
            description: None,
        };
        assert_eq!(DaylightMetric::DaylightFactor.scalar(&run), &MetricValue::Number(2.4));
        assert_eq!(DaylightMetric::SpatialDaylightAutonomy.scalar(&run), &MetricValue::Number(60.0));
        assert_eq!(DaylightMetric::UsefulDaylightIlluminance.scalar(&run), &MetricValue::Number(2.4));
    }
}
