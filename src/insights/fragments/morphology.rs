use crate::insights::types::Insight;
use crate::schema::{City, Quarter};
use crate::utils::normalization::{display_number, has_data, parse_metric};

pub const MORPHOLOGY_TITLE: &str = "Urban Morphology";
pub const HEIGHT_TITLE: &str = "Building Height & Daylight Access";

/// Dataset term for the perimeter-block typology, matched case-insensitively
pub const PERIMETER_BLOCK_KEYWORD: &str = "kwartal";

/// Average-floor ratio that must be strictly exceeded to flag overshadowing
pub const HEIGHT_CONTRAST_RATIO: f64 = 1.5;

/// Generate morphology insights
///
/// - Perimeter blocks: when exactly one city's building types mention the
///   perimeter-block keyword, a neutral note names that city.
/// - Height contrast: when one quarter's average floors exceed the other's by
///   more than half, a `worse` note warns about the taller city's shadows.
pub fn generate_urban_morphology_insights(
    city_a: &City,
    city_b: &City,
    quarter_a: Option<&Quarter>,
    quarter_b: Option<&Quarter>,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let (Some(types_a), Some(types_b)) = (
        building_types(city_a),
        building_types(city_b),
    ) {
        match (is_perimeter_block(types_a), is_perimeter_block(types_b)) {
            (true, false) => insights.push(perimeter_block_insight(&city_a.name)),
            (false, true) => insights.push(perimeter_block_insight(&city_b.name)),
            _ => {}
        }
    }

    if let (Some(quarter_a), Some(quarter_b)) = (quarter_a, quarter_b) {
        let floors_a = parse_metric(&quarter_a.indicators.avg_floors);
        let floors_b = parse_metric(&quarter_b.indicators.avg_floors);

        if let (Some(a), Some(b)) = (floors_a, floors_b) {
            if a > b * HEIGHT_CONTRAST_RATIO {
                insights.push(height_insight(&city_a.name, a, b));
            } else if b > a * HEIGHT_CONTRAST_RATIO {
                insights.push(height_insight(&city_b.name, b, a));
            }
        }
    }

    insights
}

fn building_types(city: &City) -> Option<&str> {
    city.urban_indicators
        .building_types
        .as_deref()
        .filter(|text| has_data(*text))
}

fn is_perimeter_block(building_types: &str) -> bool {
    building_types.to_lowercase().contains(PERIMETER_BLOCK_KEYWORD)
}

fn perimeter_block_insight(city_name: &str) -> Insight {
    Insight::neutral(
        MORPHOLOGY_TITLE,
        format!(
            "{} employs perimeter block typology, which typically provides sheltered courtyards and consistent street edges. This form creates semi-private daylit outdoor spaces while maintaining urban density.",
            city_name
        ),
    )
}

fn height_insight(taller_city: &str, taller_floors: f64, other_floors: f64) -> Insight {
    Insight::worse(
        HEIGHT_TITLE,
        format!(
            "{}'s taller buildings (avg {} floors vs {}) may cast longer shadows on adjacent streets and buildings. Adequate spacing and orientation become critical to maintain daylight access at ground level.",
            taller_city,
            display_number(taller_floors),
            display_number(other_floors)
        ),
    )
}
