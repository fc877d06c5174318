use crate::insights::fragments::{nonzero_metric, Ranked};
use crate::insights::types::Insight;
use crate::schema::City;
use crate::utils::normalization::format_rounded;

pub const BUILDING_INTENSITY_TITLE: &str = "Building Intensity";
pub const GREEN_SPACE_TITLE: &str = "Green Space Access";

/// Generate urban-form insights for a pair of cities
///
/// - Building intensity: descriptive (neutral), cites the relative difference
///   against the lower city.
/// - Green space: favours the greener city, cites the percentage-point gap.
///
/// Both rules need non-zero values on both sides and skip ties.
pub fn generate_urban_form_insights(city_a: &City, city_b: &City) -> Vec<Insight> {
    let mut insights = Vec::new();
    let a = &city_a.urban_indicators;
    let b = &city_b.urban_indicators;

    if let Some(r) = Ranked::of(
        &city_a.name,
        nonzero_metric(&a.building_intensity),
        &city_b.name,
        nonzero_metric(&b.building_intensity),
    ) {
        insights.push(Insight::neutral(
            BUILDING_INTENSITY_TITLE,
            format!(
                "{} has {}% higher building intensity than {}. Higher intensity can maximize land use but may reduce access to daylight at ground level.",
                r.higher_name,
                format_rounded(r.relative_difference()),
                r.lower_name
            ),
        ));
    }

    if let Some(r) = Ranked::of(
        &city_a.name,
        nonzero_metric(&a.green_space_percentage),
        &city_b.name,
        nonzero_metric(&b.green_space_percentage),
    ) {
        insights.push(Insight::better(
            GREEN_SPACE_TITLE,
            format!(
                "{} provides {}% more green space than {}. Greater green space typically correlates with better environmental quality and more daylit outdoor space for residents.",
                r.higher_name,
                format_rounded(r.point_difference()),
                r.lower_name
            ),
        ));
    }

    insights
}
