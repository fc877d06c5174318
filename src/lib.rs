//! City Daylight Comparison Engine
//!
//! Read-only comparison of pre-simulated urban daylight metrics across a small
//! set of cities.
//!
//! - `schema/`: typed City / Quarter / simulation records
//! - `utils/`: value normalization and image path resolution
//! - `comparison/`: which side wins for a metric, side-by-side metric rows
//! - `insights/`: rule families producing natural-language insights, report
//!   generator and formatters
//! - `data`: document loading and id lookup
//! - `config`: environment configuration

pub mod schema;
pub mod utils;
pub mod comparison;
pub mod insights;
pub mod data;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use schema::{CitiesData, City, MetricValue, Quarter};
pub use utils::{format_metric_value, has_data, FolderMap, ImageResolver};
pub use comparison::{compare_metric, Directionality, Winner};
pub use insights::{
    generate_daylight_insights, generate_urban_form_insights, generate_urban_morphology_insights,
    CityComparison, ComparisonGenerator, Insight, InsightCategory,
};
pub use data::{CityCatalog, CitySummary, LookupError};
pub use config::AppConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
