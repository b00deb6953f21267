use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Text labels used by the filter panel
///
/// The host supplies localized strings; everything falls back to the
/// English defaults. `all` doubles as the single-select sentinel that
/// clears a column's filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterTextLabels {
    /// Panel title
    pub title: String,
    /// Reset button label
    pub reset: String,
    /// Apply button label
    pub apply: String,
    /// Sentinel entry in single-select controls meaning "no filter"
    pub all: String,
}

impl Default for FilterTextLabels {
    fn default() -> Self {
        Self {
            title: "FILTERS".to_string(),
            reset: "RESET".to_string(),
            apply: "APPLY".to_string(),
            all: "All".to_string(),
        }
    }
}

impl FilterTextLabels {
    /// Load labels from a TOML file; missing keys keep their defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let labels: FilterTextLabels = toml::from_str(&contents)?;
        Ok(labels)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }
}
