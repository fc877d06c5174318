//! Image path resolution
//!
//! Image fields in the city document are logical names (`"SCHWARZPLAN"`), not
//! paths. They resolve to `<base_url><city folder>/<name>.PNG`, where the city
//! folder comes from an injectable [`FolderMap`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::schema::{City, DaylightMetric, Scenario};
use crate::utils::normalization::has_data;

const IMAGE_EXTENSION: &str = "PNG";

/// City display name → asset folder name
#[derive(Debug, Clone)]
pub struct FolderMap {
    folders: FxHashMap<String, String>,
}

impl Default for FolderMap {
    fn default() -> Self {
        Self::from_pairs([
            ("Elephant and Castle", "ELEPHANT_AND_CASTLE"),
            ("Garnizon", "GARNIZON"),
            ("Hudson Yards", "HUDSON_YARDS"),
        ])
    }
}

impl FolderMap {
    pub fn empty() -> Self {
        Self {
            folders: FxHashMap::default(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            folders: pairs
                .into_iter()
                .map(|(name, folder)| (name.into(), folder.into()))
                .collect(),
        }
    }

    /// Load a `{ "<city name>": "<FOLDER>" }` JSON object
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read folder map: {:?}", path))?;

        let folders: FxHashMap<String, String> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse folder map JSON: {:?}", path))?;

        Ok(Self { folders })
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Mapped folder, or the name upper-cased with whitespace runs replaced by `_`
    pub fn folder_for(&self, city_name: &str) -> String {
        if let Some(folder) = self.folders.get(city_name) {
            return folder.clone();
        }
        city_name
            .split_whitespace()
            .map(str::to_uppercase)
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// A resolved image with the field it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub label: String,
    pub url: String,
}

/// Turns logical image names into URLs
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
    folders: FolderMap,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new("/", FolderMap::default())
    }
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>, folders: FolderMap) -> Self {
        Self {
            base_url: base_url.into(),
            folders,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn folders(&self) -> &FolderMap {
        &self.folders
    }

    /// `None` when the image reference has no data
    pub fn resolve(&self, image: Option<&str>, city_name: &str) -> Option<String> {
        let image = image.filter(|name| has_data(*name))?;
        Some(format!(
            "{}{}/{}.{}",
            self.base_url,
            self.folders.folder_for(city_name),
            image,
            IMAGE_EXTENSION
        ))
    }

    /// Every image reference of a city and its quarters that has data
    pub fn city_images(&self, city: &City) -> Vec<ResolvedImage> {
        let mut refs: Vec<(String, Option<&str>)> = vec![
            ("Location".to_string(), city.location.image_url.as_deref()),
            ("Schwarzplan".to_string(), city.overview.schwarzplan_image.as_deref()),
            ("3D Model".to_string(), city.overview.model3d_image.as_deref()),
            ("Shading: March/September".to_string(), city.shading_analysis.march_september.as_deref()),
            ("Shading: June".to_string(), city.shading_analysis.june.as_deref()),
            ("Shading: December".to_string(), city.shading_analysis.december.as_deref()),
        ];

        for quarter in &city.quarters {
            let q = &quarter.name;
            refs.push((format!("{q}: Plan"), quarter.plan.as_deref()));
            refs.push((format!("{q}: 3D Form"), quarter.form3d.as_deref()));
            refs.push((format!("{q}: Sun Hours"), quarter.sun_hours.as_deref()));
            refs.push((format!("{q}: Daylight Potential"), quarter.daylight_potential.as_deref()));
            refs.push((format!("{q}: Daylight Potential 2"), quarter.daylight_potential2.as_deref()));
            refs.push((format!("{q}: Solar Energy"), quarter.solar_energy.as_deref()));

            for metric in DaylightMetric::ALL {
                if let Some(bundle) = quarter.simulation(metric) {
                    for (scenario, tag) in [(Scenario::WorstCase, 1), (Scenario::BestCase, 2)] {
                        refs.push((
                            format!("{q}: {} Simulation {tag}", metric.short_name()),
                            bundle.scenario(scenario).image.as_deref(),
                        ));
                    }
                }
            }

            if let Some(shading) = &quarter.shading_analysis {
                refs.push((format!("{q}: Shading March/September"), shading.march_september.as_deref()));
                refs.push((format!("{q}: Shading June"), shading.june.as_deref()));
                refs.push((format!("{q}: Shading December"), shading.december.as_deref()));
            }
        }

        refs.into_iter()
            .filter_map(|(label, image)| {
                self.resolve(image, &city.name)
                    .map(|url| ResolvedImage { label, url })
            })
            .collect()
    }
}
