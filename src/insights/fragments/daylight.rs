use crate::insights::fragments::{nonzero_metric, Ranked};
use crate::insights::types::Insight;
use crate::schema::{City, DaylightMetric, Quarter, Scenario};
use crate::utils::normalization::{display_number, format_rounded};

pub const DAYLIGHT_FACTOR_TITLE: &str = "Daylight Factor Performance";
pub const SDA_TITLE: &str = "Spatial Daylight Autonomy";
pub const UDI_TITLE: &str = "Useful Daylight Range";

/// Generate daylight insights from the worst-case simulation of each quarter
///
/// One `better` insight per metric (DF, sDA, UDI) naming the higher-performing
/// city. DF and UDI cite the difference relative to the lower value; sDA cites
/// both raw percentages. A metric needs a non-zero value on both sides.
pub fn generate_daylight_insights(
    city_a: &City,
    city_b: &City,
    quarter_a: Option<&Quarter>,
    quarter_b: Option<&Quarter>,
) -> Vec<Insight> {
    let (Some(quarter_a), Some(quarter_b)) = (quarter_a, quarter_b) else {
        return Vec::new();
    };

    DaylightMetric::ALL
        .into_iter()
        .filter_map(|metric| {
            let ranked = Ranked::of(
                &city_a.name,
                nonzero_metric(quarter_a.simulated_value(metric, Scenario::WorstCase)),
                &city_b.name,
                nonzero_metric(quarter_b.simulated_value(metric, Scenario::WorstCase)),
            )?;
            Some(daylight_insight(metric, &ranked))
        })
        .collect()
}

fn daylight_insight(metric: DaylightMetric, r: &Ranked<'_>) -> Insight {
    match metric {
        DaylightMetric::DaylightFactor => Insight::better(
            DAYLIGHT_FACTOR_TITLE,
            format!(
                "{} achieves {}% higher Daylight Factor than {}. This indicates better access to natural daylight under overcast conditions, reducing artificial lighting needs and improving occupant wellbeing.",
                r.higher_name,
                format_rounded(r.relative_difference()),
                r.lower_name
            ),
        ),
        DaylightMetric::SpatialDaylightAutonomy => Insight::better(
            SDA_TITLE,
            format!(
                "{}'s spaces achieve daylight autonomy for {}% of floor area, compared to {}% in {}. Higher sDA means less reliance on electric lighting during occupied hours.",
                r.higher_name,
                display_number(r.higher),
                display_number(r.lower),
                r.lower_name
            ),
        ),
        DaylightMetric::UsefulDaylightIlluminance => Insight::better(
            UDI_TITLE,
            format!(
                "{} maintains useful daylight levels {}% of the time, versus {}% in {} ({}% higher). Better UDI indicates balanced daylight, neither too dim nor causing glare or overheating.",
                r.higher_name,
                display_number(r.higher),
                display_number(r.lower),
                r.lower_name,
                format_rounded(r.relative_difference())
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::InsightCategory;
    use crate::schema::{MetricValue, SimulationBundle, SimulationData};

    fn bundle(value: MetricValue, metric: DaylightMetric) -> SimulationBundle {
        let mut run = SimulationData::default();
        match metric {
            DaylightMetric::SpatialDaylightAutonomy => run.autonomy = value,
            _ => run.avg_value = value,
        }
        SimulationBundle {
            simulation1: run,
            ..Default::default()
        }
    }

    fn quarter(df: Option<f64>, sda: Option<f64>, udi: Option<f64>) -> Quarter {
        Quarter {
            id: 1,
            name: "Q1".into(),
            daylight_factor: df.map(|v| bundle(v.into(), DaylightMetric::DaylightFactor)),
            spatial_daylight_autonomy: sda.map(|v| bundle(v.into(), DaylightMetric::SpatialDaylightAutonomy)),
            useful_daylight_illuminance: udi.map(|v| bundle(v.into(), DaylightMetric::UsefulDaylightIlluminance)),
            ..Default::default()
        }
    }

    fn city(name: &str) -> City {
        City {
            id: name.to_lowercase(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_three_metrics() {
        let qa = quarter(Some(3.0), Some(55.0), Some(62.5));
        let qb = quarter(Some(2.0), Some(70.0), Some(50.0));

        let insights = generate_daylight_insights(&city("Alpha"), &city("Beta"), Some(&qa), Some(&qb));
        assert_eq!(insights.len(), 3);
        assert!(insights.iter().all(|i| i.category == InsightCategory::Better));

        assert_eq!(insights[0].title, DAYLIGHT_FACTOR_TITLE);
        assert!(insights[0].content.starts_with("Alpha achieves 50% higher Daylight Factor than Beta"));

        assert_eq!(insights[1].title, SDA_TITLE);
        assert!(insights[1].content.contains("Beta's spaces achieve daylight autonomy for 70% of floor area, compared to 55% in Alpha"));

        assert_eq!(insights[2].title, UDI_TITLE);
        assert!(insights[2].content.contains("Alpha maintains useful daylight levels 62.5% of the time, versus 50% in Beta (25% higher)"));
    }

    #[test]
    fn test_missing_daylight_factor_on_both_sides() {
        let qa = quarter(None, None, None);
        let qb = quarter(None, None, None);
        assert!(generate_daylight_insights(&city("Alpha"), &city("Beta"), Some(&qa), Some(&qb)).is_empty());
    }

    #[test]
    fn test_one_sided_and_missing_quarter() {
        let qa = quarter(Some(3.0), None, Some(40.0));
        let qb = quarter(None, Some(50.0), Some(40.0));
        assert!(generate_daylight_insights(&city("Alpha"), &city("Beta"), Some(&qa), Some(&qb)).is_empty());
        assert!(generate_daylight_insights(&city("Alpha"), &city("Beta"), Some(&qa), None).is_empty());
    }

    #[test]
    fn test_zero_is_skipped() {
        let qa = quarter(Some(0.0), None, None);
        let qb = quarter(Some(2.0), None, None);
        assert!(generate_daylight_insights(&city("Alpha"), &city("Beta"), Some(&qa), Some(&qb)).is_empty());
    }

    #[test]
    fn test_best_case_is_ignored() {
        let mut qa = quarter(Some(2.0), None, None);
        let qb = quarter(Some(2.0), None, None);
        if let Some(df) = qa.daylight_factor.as_mut() {
            df.simulation2.avg_value = 9.0.into();
        }
        assert!(generate_daylight_insights(&city("Alpha"), &city("Beta"), Some(&qa), Some(&qb)).is_empty());
    }
}
