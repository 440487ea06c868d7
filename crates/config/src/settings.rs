// Application settings
// Loaded from ~/.config/pivotgrid/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/cabledata";

/// Where the dataset comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in mock dataset (default)
    #[default]
    Fixture,
    /// JSON fetched from the configured endpoint
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Selected data source
    #[serde(rename = "source.kind")]
    pub source: SourceKind,

    /// Endpoint for the remote source
    #[serde(rename = "source.endpoint")]
    pub endpoint: String,

    /// Dotted path to the record list inside the response body
    /// (empty = the body itself is the list)
    #[serde(rename = "source.recordsPath")]
    pub records_path: String,

    /// Humanize field names into display labels
    #[serde(rename = "export.humanizeHeaders")]
    pub humanize_headers: bool,

    /// Default CSV export filename
    #[serde(rename = "export.filename")]
    pub export_filename: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source: SourceKind::Fixture,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            records_path: String::new(),
            humanize_headers: true,
            export_filename: "cable_data.csv".to_string(),
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pivotgrid")
            .join("settings.json")
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable. Unknown keys are ignored; missing keys default.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}
