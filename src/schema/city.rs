//! City records as loaded from the static document.

use serde::{Deserialize, Serialize};

use super::metric_value::MetricValue;
use super::quarter::Quarter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub country: Option<String>,
    pub coordinates: Coordinates,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    pub years: Option<String>,
    pub description: Option<String>,
}

/// Figure-ground / 3D model references and the city-level floor area ratio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub schwarzplan_image: Option<String>,
    pub model3d_image: Option<String>,
    pub far: MetricValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrbanIndicators {
    pub building_intensity: MetricValue,
    pub green_space_percentage: MetricValue,
    /// Free text, e.g. "kwartały, punktowce"
    pub building_types: Option<String>,
    pub transport: Option<String>,
}

/// Shadow studies at the equinox and both solstices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadingAnalysis {
    pub march_september: Option<String>,
    pub june: Option<String>,
    pub december: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub overview: Overview,
    #[serde(default)]
    pub urban_indicators: UrbanIndicators,
    #[serde(default)]
    pub shading_analysis: ShadingAnalysis,
    #[serde(default)]
    pub quarters: Vec<Quarter>,
}

impl City {
    /// The quarter that stands in for the whole city in side-by-side comparisons.
    pub fn first_quarter(&self) -> Option<&Quarter> {
        self.quarters.first()
    }

    pub fn quarter(&self, id: u32) -> Option<&Quarter> {
        self.quarters.iter().find(|q| q.id == id)
    }
}

/// The whole static document: `{ "cities": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitiesData {
    pub cities: Vec<City>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_city() {
        let json = r#"{
            "id": "garnizon",
            "name": "Garnizon",
            "urbanIndicators": { "buildingIntensity": "1.8", "greenSpacePercentage": 0 },
            "quarters": [{ "id": 1, "name": "Q1" }, { "id": 2, "name": "Q2" }]
        }"#;
        let city: City = serde_json::from_str(json).unwrap();

        assert_eq!(city.urban_indicators.building_intensity, MetricValue::Text("1.8".into()));
        assert_eq!(city.urban_indicators.green_space_percentage, MetricValue::Number(0.0));
        assert!(city.urban_indicators.building_types.is_none());
        assert_eq!(city.first_quarter().map(|q| q.id), Some(1));
        assert_eq!(city.quarter(2).map(|q| q.name.as_str()), Some("Q2"));
        assert!(city.quarter(3).is_none());
    }
}
