use crate::insights::types::CityComparison;
use serde_json;

/// JSON formatter for comparison reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(comparison: &CityComparison) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(comparison)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(comparison: &CityComparison) -> Result<String, serde_json::Error> {
        serde_json::to_string(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CitySummary;
    use crate::insights::types::*;

    fn comparison() -> CityComparison {
        CityComparison {
            city_a: CitySummary {
                id: "garnizon".to_string(),
                name: "Garnizon".to_string(),
                country: Some("Poland".to_string()),
                quarter_count: 1,
            },
            city_b: CitySummary {
                id: "hudson-yards".to_string(),
                name: "Hudson Yards".to_string(),
                country: None,
                quarter_count: 0,
            },
            quarter_a: None,
            quarter_b: None,
            metrics: vec![],
            images: vec![],
            insights: ComparisonInsights {
                urban_form: vec![Insight::better(
                    "Green Space Access",
                    "Garnizon provides 15% more green space than Hudson Yards.".to_string(),
                )],
                morphology: vec![],
                daylight: vec![],
            },
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&comparison()).unwrap();

        assert!(json.contains("\"id\": \"garnizon\""));
        assert!(json.contains("\"category\": \"better\""));
        assert!(json.contains("\"country\": null"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&comparison()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));
    }
}
