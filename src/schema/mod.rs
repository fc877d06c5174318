//! Typed shape of the city document.
//!
//! Every optional level of the source JSON is an explicit `Option` or a
//! [`MetricValue::Absent`]; nothing is inferred from truthiness.

pub mod metric_value;
pub mod city;
pub mod quarter;

pub use metric_value::MetricValue;
pub use city::{
    CitiesData, City, Coordinates, Location, Overview, ShadingAnalysis, Timeline, UrbanIndicators,
};
pub use quarter::{
    DaylightMetric, Quarter, QuarterIndicators, Scenario, SimulationBundle, SimulationData,
};
