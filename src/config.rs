use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::constants;
use crate::error::{ImportError, Result};
use crate::normalize::VenueMap;

/// Personal settings for an import run.
///
/// Every field has a default, so an empty file (or no file at all) yields the
/// values the spreadsheet was originally converted with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Target table of the generated statements
    pub table: String,
    /// Owner of the imported events
    pub users_id: i64,
    /// Rating given to every imported event
    pub rating: i32,
    /// Raw location → festival name; replaces the built-in table when present
    pub venues: BTreeMap<String, String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            table: constants::DEFAULT_TABLE.to_string(),
            users_id: constants::DEFAULT_USERS_ID,
            rating: constants::DEFAULT_RATING,
            venues: constants::default_venue_table()
                .into_iter()
                .map(|(raw, place)| (raw.to_string(), place.to_string()))
                .collect(),
        }
    }
}

impl ImportConfig {
    /// Load configuration from an explicit path, or from `bands_import.toml`
    /// in the working directory when it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    debug!("No config file found, using built-in defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), venues = config.venues.len(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ImportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let table = self.table.trim();
        let valid_table = !table.is_empty()
            && table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        if !valid_table {
            return Err(ImportError::Config(format!(
                "Invalid table name '{}'",
                self.table
            )));
        }
        if let Some(raw) = self.venues.keys().find(|k| k.trim() != k.as_str()) {
            return Err(ImportError::Config(format!(
                "Venue key '{}' has surrounding whitespace and would never match",
                raw
            )));
        }
        Ok(())
    }

    pub fn venue_map(&self) -> VenueMap {
        VenueMap::from_pairs(self.venues.clone())
    }
}
