// Pivot widget view state
// The widget owns this shape; we store and re-supply it without looking
// inside. Stored at ~/.config/pivotgrid/view_state.json.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewState {
    pub version: u32,
    /// Opaque widget-owned configuration. Never inspected or validated
    /// here; the widget emits a replacement on every change and the
    /// host passes it back on the next render.
    pub state: serde_json::Value,
}

impl ViewState {
    pub fn new(state: serde_json::Value) -> Self {
        ViewState { version: 1, state }
    }

    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pivotgrid")
            .join("view_state.json")
    }

    /// Missing or unreadable state is a fresh start, never an error.
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
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
