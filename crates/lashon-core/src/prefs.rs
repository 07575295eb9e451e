//! Preference persistence for host applications.
//!
//! A single JSON file in the application data directory remembers the
//! selected inflection between sessions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LashonResult;
use crate::gender::Gender;

/// File name within the data directory
const PREFS_FILE: &str = "preferences.json";

/// User preferences persisted between sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred grammatical gender; `None` shows text as authored
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl Preferences {
    /// Path of the preferences file under `data_dir`
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(PREFS_FILE)
    }

    /// Load preferences, falling back to defaults when no file exists yet.
    pub fn load(data_dir: &Path) -> LashonResult<Preferences> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save preferences, creating the data directory if needed.
    pub fn save(&self, data_dir: &Path) -> LashonResult<()> {
        fs::create_dir_all(data_dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(data_dir), raw)?;
        debug!("saved preferences under {}", data_dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(dir.path()).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.gender, None);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences {
            gender: Some(Gender::Female),
        };
        prefs.save(dir.path()).unwrap();
        assert_eq!(Preferences::load(dir.path()).unwrap(), prefs);
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("still");
        Preferences::default().save(&nested).unwrap();
        assert!(Preferences::path(&nested).exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(Preferences::path(dir.path()), "not json").unwrap();
        assert!(Preferences::load(dir.path()).is_err());
    }
}
