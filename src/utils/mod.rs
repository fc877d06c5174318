//! Utility modules shared across the engine
//!
//! - Normalization: presence checks, numeric parsing, display formatting
//! - Image paths: logical image name → URL resolution

pub mod normalization;
pub mod image_paths;

// Re-export commonly used items
pub use normalization::{
    display_number, format_metric_value, format_rounded, has_data, parse_metric, to_fixed,
    Presence, NO_DATA,
};
pub use image_paths::{FolderMap, ImageResolver, ResolvedImage};
