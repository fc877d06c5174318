//! Runtime configuration from environment variables.

use std::path::PathBuf;

use anyhow::Result;

use crate::utils::image_paths::{FolderMap, ImageResolver};

pub const DEFAULT_DATA_PATH: &str = "data/cities.json";
pub const DEFAULT_IMAGE_BASE_URL: &str = "/";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `CITIES_DATA`
    pub data_path: PathBuf,
    /// `IMAGE_BASE_URL`
    pub image_base_url: String,
    /// `FOLDER_MAP`: JSON object overriding the built-in folder table
    pub folder_map_path: Option<PathBuf>,
    /// `PORT`
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            folder_map_path: None,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys and an unparseable port fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            data_path: lookup("CITIES_DATA").map(PathBuf::from).unwrap_or(defaults.data_path),
            image_base_url: lookup("IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
            folder_map_path: lookup("FOLDER_MAP").map(PathBuf::from),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Folder table from `FOLDER_MAP`, or the built-in one
    pub fn folder_map(&self) -> Result<FolderMap> {
        match &self.folder_map_path {
            Some(path) => FolderMap::load(path),
            None => Ok(FolderMap::default()),
        }
    }

    pub fn image_resolver(&self) -> Result<ImageResolver> {
        Ok(ImageResolver::new(self.image_base_url.clone(), self.folder_map()?))
    }
}
