//! Storage utilities for the UTS apps
//!
//! Settings live as pretty-printed JSON under the platform config directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for a UTS app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("com", "proyekuts", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read a JSON document. A missing file yields `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Write a JSON document, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), "saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<Sample> = load_json(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("sample.json");
        let sample = Sample { name: "kalkulator".into(), count: 3 };

        save_json(&path, &sample).unwrap();
        let loaded: Option<Sample> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(sample));
    }

    #[test]
    fn test_corrupt_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<Option<Sample>> = load_json(&path);
        assert!(matches!(result, Err(StorageError::Json(_))));
    }

    #[test]
    fn test_config_dir_ends_with_app_name() {
        let dir = config_dir("utscalc");
        // Falls back to "." when no home directory is available.
        assert!(dir.to_string_lossy().contains("utscalc") || dir == PathBuf::from("."));
    }
}
