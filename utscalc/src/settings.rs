//! Calculator settings, persisted as JSON in the app config directory

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use utscore::storage::{self, config_dir};

use crate::engine::{EngineSettings, DEFAULT_MAX_DISPLAY_LEN};
use crate::format::Precision;

const MAX_DISPLAY_LEN_LIMIT: usize = 32;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Longest entry the display accepts (1-32)
    pub max_display_len: usize,
    /// Decimal places for results; `None` keeps the shortest exact form
    pub precision: Option<u8>,
    /// Feed typed keys to the calculator
    pub keyboard_input: bool,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
            precision: None,
            keyboard_input: true,
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir("utscalc").join("settings.json")
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
            Self::default()
        })
    }

    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> storage::Result<Self> {
        Ok(storage::load_json::<Self>(path)?.unwrap_or_default())
    }

    pub fn save(&self) {
        let path = Self::config_path();
        if let Err(e) = self.save_to(&path) {
            warn!(path = %path.display(), error = %e, "could not save settings");
        }
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(path, self)
    }

    pub fn engine(&self) -> EngineSettings {
        EngineSettings {
            max_display_len: self.max_display_len.clamp(1, MAX_DISPLAY_LEN_LIMIT),
            precision: Precision::from(self.precision),
        }
    }
}
