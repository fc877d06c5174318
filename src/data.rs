//! Data Loading and Lookup
//!
//! Loads the static `{ "cities": [...] }` document once and indexes it by id.
//! The loaded snapshot is immutable; nothing in the crate writes back to it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::{CitiesData, City, Quarter};

/// Unknown id requested by a caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("City {0} not found")]
    CityNotFound(String),
    #[error("Quarter {quarter} not found in city {city}")]
    QuarterNotFound { city: String, quarter: u32 },
}

/// Short description of a city for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySummary {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub quarter_count: usize,
}

impl From<&City> for CitySummary {
    fn from(city: &City) -> Self {
        CitySummary {
            id: city.id.clone(),
            name: city.name.clone(),
            country: city.location.country.clone(),
            quarter_count: city.quarters.len(),
        }
    }
}

impl CitiesData {
    /// Load the document from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cities data: {:?}", path))?;

        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse cities data: {:?}", path))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Immutable, id-indexed view over the loaded document
#[derive(Debug, Clone)]
pub struct CityCatalog {
    data: CitiesData,
    index: FxHashMap<String, usize>,
}

impl CityCatalog {
    /// Index the document; duplicate city ids, or duplicate quarter ids inside
    /// one city, are rejected.
    pub fn new(data: CitiesData) -> Result<Self> {
        let mut index = FxHashMap::default();

        for (position, city) in data.cities.iter().enumerate() {
            if index.insert(city.id.clone(), position).is_some() {
                anyhow::bail!("Duplicate city id '{}' in cities data", city.id);
            }

            let mut quarter_ids = FxHashSet::default();
            for quarter in &city.quarters {
                if !quarter_ids.insert(quarter.id) {
                    anyhow::bail!("Duplicate quarter id {} in city '{}'", quarter.id, city.id);
                }
            }
        }

        Ok(Self { data, index })
    }

    /// Load and index the document at `path`
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading cities data from {:?}", path);
        let catalog = Self::new(CitiesData::load(path)?)?;
        tracing::info!(
            "Loaded {} cities ({} quarters)",
            catalog.len(),
            catalog.cities().iter().map(|c| c.quarters.len()).sum::<usize>()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.data.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.cities.is_empty()
    }

    /// All cities in document order
    pub fn cities(&self) -> &[City] {
        &self.data.cities
    }

    pub fn summaries(&self) -> Vec<CitySummary> {
        self.data.cities.iter().map(CitySummary::from).collect()
    }

    pub fn city(&self, id: &str) -> Result<&City, LookupError> {
        self.index
            .get(id)
            .map(|&position| &self.data.cities[position])
            .ok_or_else(|| LookupError::CityNotFound(id.to_string()))
    }

    pub fn quarter(&self, city_id: &str, quarter_id: u32) -> Result<&Quarter, LookupError> {
        self.city(city_id)?
            .quarter(quarter_id)
            .ok_or_else(|| LookupError::QuarterNotFound {
                city: city_id.to_string(),
                quarter: quarter_id,
            })
    }
}
