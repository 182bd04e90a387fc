use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::common::read_text;

/// Where to find the input files and the geocoding service.
///
/// Read from a JSON file; every field is optional and falls back to the
/// layout of the published data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OFLC wage CSV with geography and SOC columns.
    pub wages: PathBuf,
    /// State outlines (GeoJSON).
    pub states: PathBuf,
    /// Metro and nonmetro area boundaries (GeoJSON).
    pub areas: PathBuf,
    /// Base URL of the zip code geocoder; requests go to `{geocoder_url}/{zip}`.
    pub geocoder_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wages: "data/OFLC_Wages_2024-25/official/ALC_with_geography_and_soc.csv".into(),
            states: "data/gz_2010_us_040_00_5m.json".into(),
            areas: "data/cbsa_boundaries_raw.geojson".into(),
            geocoder_url: "https://api.zippopotam.us/us".to_string(),
        }
    }
}

impl Config {
    /// Read a config file, or use the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => Self::from_json_str(&read_text(path)?)
                .with_context(|| format!("[config] Failed to load config from {}", path.display())),
        }
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("[config] Invalid config JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::from_json_str(r#"{"wages": "wages.csv"}"#).unwrap();
        assert_eq!(config.wages, PathBuf::from("wages.csv"));
        assert_eq!(config.areas, Config::default().areas);
        assert_eq!(config.geocoder_url, "https://api.zippopotam.us/us");
    }

    #[test]
    fn load_reads_file_or_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"geocoder_url": "http://localhost:9000/us"}}"#).unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.geocoder_url, "http://localhost:9000/us");
        assert_eq!(config.states, Config::default().states);
    }

    #[test]
    fn invalid_json_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("[config] Failed to load config"));
    }
}
