//! Insight generation
//!
//! - `fragments/`: the three rule families (urban form, morphology, daylight)
//! - `generator`: assembles the side-by-side comparison report
//! - `formatters/`: JSON and Markdown output

pub mod types;
pub mod fragments;
pub mod generator;
pub mod formatters;

pub use types::{
    CityComparison, ComparisonInsights, ImagePair, Insight, InsightCategory, QuarterRef,
};

pub use fragments::{
    generate_daylight_insights, generate_urban_form_insights, generate_urban_morphology_insights,
};

pub use generator::{generate_insights, ComparisonGenerator};
pub use formatters::{JsonFormatter, MarkdownFormatter};
