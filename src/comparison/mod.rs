//! Comparison engine
//!
//! - Comparator: which side wins for one metric
//! - Metric table: labelled rows for the side-by-side view

pub mod comparator;
pub mod metric_table;

pub use comparator::{compare_metric, compare_with_policy, percent_difference, Directionality, Winner};
pub use metric_table::{
    daylight_section, quarter_indicator_section, urban_indicator_section, MetricRow, MetricSection,
};
