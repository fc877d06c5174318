use serde::{Deserialize, Serialize};

use crate::comparison::MetricSection;
use crate::data::CitySummary;

/// Whether an observation reads as favourable, unfavourable, or descriptive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Better,
    Worse,
    Neutral,
}

impl InsightCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            InsightCategory::Better => "▲",
            InsightCategory::Worse => "▼",
            InsightCategory::Neutral => "•",
        }
    }
}

/// One generated observation about a pair of cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub content: String,
    pub category: InsightCategory,
}

impl Insight {
    pub fn new(title: &str, content: String, category: InsightCategory) -> Self {
        Self {
            title: title.to_string(),
            content,
            category,
        }
    }

    pub fn better(title: &str, content: String) -> Self {
        Self::new(title, content, InsightCategory::Better)
    }

    pub fn worse(title: &str, content: String) -> Self {
        Self::new(title, content, InsightCategory::Worse)
    }

    pub fn neutral(title: &str, content: String) -> Self {
        Self::new(title, content, InsightCategory::Neutral)
    }
}

/// The three insight families for one city pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonInsights {
    pub urban_form: Vec<Insight>,
    pub morphology: Vec<Insight>,
    pub daylight: Vec<Insight>,
}

impl ComparisonInsights {
    pub fn total(&self) -> usize {
        self.urban_form.len() + self.morphology.len() + self.daylight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Titled pair of resolved image URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePair {
    pub title: String,
    pub image_a: Option<String>,
    pub image_b: Option<String>,
}

/// Name of the quarter representing each city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterRef {
    pub id: u32,
    pub name: String,
}

/// Complete side-by-side comparison of two cities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityComparison {
    pub city_a: CitySummary,
    pub city_b: CitySummary,
    pub quarter_a: Option<QuarterRef>,
    pub quarter_b: Option<QuarterRef>,
    pub metrics: Vec<MetricSection>,
    pub images: Vec<ImagePair>,
    pub insights: ComparisonInsights,
}
