use crate::comparison::{daylight_section, quarter_indicator_section, urban_indicator_section, MetricSection};
use crate::data::CitySummary;
use crate::insights::fragments::{
    generate_daylight_insights, generate_urban_form_insights, generate_urban_morphology_insights,
};
use crate::insights::types::*;
use crate::schema::{City, DaylightMetric, Quarter, Scenario};
use crate::utils::image_paths::ImageResolver;
use crate::utils::normalization::has_data;

/// Run all three insight families for a city pair.
///
/// Each city is represented by its first quarter.
pub fn generate_insights(city_a: &City, city_b: &City) -> ComparisonInsights {
    let quarter_a = city_a.first_quarter();
    let quarter_b = city_b.first_quarter();

    ComparisonInsights {
        urban_form: generate_urban_form_insights(city_a, city_b),
        morphology: generate_urban_morphology_insights(city_a, city_b, quarter_a, quarter_b),
        daylight: generate_daylight_insights(city_a, city_b, quarter_a, quarter_b),
    }
}

/// Builds the full side-by-side comparison report
pub struct ComparisonGenerator {
    resolver: ImageResolver,
}

impl Default for ComparisonGenerator {
    fn default() -> Self {
        Self::new(ImageResolver::default())
    }
}

impl ComparisonGenerator {
    pub fn new(resolver: ImageResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    /// Generate the complete comparison of two cities
    ///
    /// Pure with respect to its inputs: the same pair always yields the same report.
    pub fn generate(&self, city_a: &City, city_b: &City) -> CityComparison {
        let quarter_a = city_a.first_quarter();
        let quarter_b = city_b.first_quarter();

        let mut metrics = vec![urban_indicator_section(city_a, city_b)];
        if let (Some(qa), Some(qb)) = (quarter_a, quarter_b) {
            metrics.push(quarter_indicator_section(qa, qb));
            let daylight = daylight_section(qa, qb);
            if !daylight.rows.is_empty() {
                metrics.push(daylight);
            }
        }

        let images = self.image_pairs(city_a, city_b, quarter_a, quarter_b);
        let insights = generate_insights(city_a, city_b);

        tracing::debug!(
            "Compared {} vs {}: {} metric sections, {} image pairs, insights urban_form={} morphology={} daylight={}",
            city_a.id,
            city_b.id,
            metrics.len(),
            images.len(),
            insights.urban_form.len(),
            insights.morphology.len(),
            insights.daylight.len(),
        );

        CityComparison {
            city_a: CitySummary::from(city_a),
            city_b: CitySummary::from(city_b),
            quarter_a: quarter_a.map(quarter_ref),
            quarter_b: quarter_b.map(quarter_ref),
            metrics,
            images,
            insights,
        }
    }

    /// Titled image pairs; a pair is dropped when neither side has the image
    fn image_pairs(
        &self,
        city_a: &City,
        city_b: &City,
        quarter_a: Option<&Quarter>,
        quarter_b: Option<&Quarter>,
    ) -> Vec<ImagePair> {
        let mut refs: Vec<(&str, Option<&str>, Option<&str>)> = vec![
            (
                "Schwarzplan (Figure-Ground)",
                city_a.overview.schwarzplan_image.as_deref(),
                city_b.overview.schwarzplan_image.as_deref(),
            ),
            (
                "3D Model",
                city_a.overview.model3d_image.as_deref(),
                city_b.overview.model3d_image.as_deref(),
            ),
            (
                "March/September (Equinox)",
                city_a.shading_analysis.march_september.as_deref(),
                city_b.shading_analysis.march_september.as_deref(),
            ),
            (
                "June (Summer Solstice)",
                city_a.shading_analysis.june.as_deref(),
                city_b.shading_analysis.june.as_deref(),
            ),
            (
                "December (Winter Solstice)",
                city_a.shading_analysis.december.as_deref(),
                city_b.shading_analysis.december.as_deref(),
            ),
        ];

        if let (Some(qa), Some(qb)) = (quarter_a, quarter_b) {
            for metric in DaylightMetric::ALL {
                refs.push((
                    distribution_title(metric),
                    simulation_image(qa, metric),
                    simulation_image(qb, metric),
                ));
            }
        }

        refs.into_iter()
            .filter(|(_, a, b)| has_data(a) || has_data(b))
            .map(|(title, a, b)| ImagePair {
                title: title.to_string(),
                image_a: self.resolver.resolve(a, &city_a.name),
                image_b: self.resolver.resolve(b, &city_b.name),
            })
            .collect()
    }
}

fn quarter_ref(quarter: &Quarter) -> QuarterRef {
    QuarterRef {
        id: quarter.id,
        name: quarter.name.clone(),
    }
}

fn simulation_image(quarter: &Quarter, metric: DaylightMetric) -> Option<&str> {
    quarter
        .simulation(metric)
        .and_then(|bundle| bundle.scenario(Scenario::WorstCase).image.as_deref())
}

fn distribution_title(metric: DaylightMetric) -> &'static str {
    match metric {
        DaylightMetric::DaylightFactor => "Daylight Factor Distribution",
        DaylightMetric::SpatialDaylightAutonomy => "Spatial Daylight Autonomy",
        DaylightMetric::UsefulDaylightIlluminance => "Useful Daylight Illuminance",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::Winner;
    use crate::schema::{SimulationBundle, SimulationData};
    use crate::utils::image_paths::FolderMap;

    fn sample_city(id: &str, name: &str, green: f64, floors: f64, df: Option<f64>) -> City {
        let mut city = City {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        };
        city.urban_indicators.green_space_percentage = green.into();
        city.overview.schwarzplan_image = Some("SCHWARZPLAN".into());

        let mut quarter = Quarter {
            id: 1,
            name: format!("{name} Q1"),
            ..Default::default()
        };
        quarter.indicators.avg_floors = floors.into();
        quarter.daylight_factor = df.map(|v| SimulationBundle {
            simulation1: SimulationData {
                image: Some("DF_1".into()),
                avg_value: v.into(),
                ..Default::default()
            },
            ..Default::default()
        });
        city.quarters.push(quarter);
        city
    }

    #[test]
    fn test_generate_report() {
        let a = sample_city("alpha", "Alpha", 30.0, 20.0, Some(3.0));
        let b = sample_city("beta", "Beta", 15.0, 5.0, None);
        let generator = ComparisonGenerator::new(ImageResolver::new("/img/", FolderMap::empty()));

        let report = generator.generate(&a, &b);

        assert_eq!(report.city_a.id, "alpha");
        assert_eq!(report.quarter_b.as_ref().map(|q| q.name.as_str()), Some("Beta Q1"));

        let titles: Vec<&str> = report.metrics.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Urban Indicators", "Quarter Indicators", "Daylight Performance"]);
        assert_eq!(report.metrics[0].rows[1].winner, Winner::A);

        assert_eq!(report.images.len(), 2);
        assert_eq!(report.images[0].image_a.as_deref(), Some("/img/ALPHA/SCHWARZPLAN.PNG"));
        assert_eq!(report.images[1].title, "Daylight Factor Distribution");
        assert_eq!(report.images[1].image_b, None);

        assert_eq!(report.insights.urban_form.len(), 1);
        assert_eq!(report.insights.morphology.len(), 1);
        assert!(report.insights.daylight.is_empty());
    }

    #[test]
    fn test_city_without_quarters() {
        let a = sample_city("alpha", "Alpha", 30.0, 20.0, Some(3.0));
        let mut b = sample_city("beta", "Beta", 15.0, 5.0, None);
        b.quarters.clear();

        let report = ComparisonGenerator::default().generate(&a, &b);
        assert_eq!(report.metrics.len(), 1);
        assert!(report.quarter_b.is_none());
        assert!(report.insights.morphology.is_empty());
        assert!(report.insights.daylight.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = sample_city("alpha", "Alpha", 30.0, 20.0, Some(3.0));
        let b = sample_city("beta", "Beta", 15.0, 5.0, Some(2.0));
        let generator = ComparisonGenerator::default();
        assert_eq!(generator.generate(&a, &b), generator.generate(&a, &b));
    }
}
