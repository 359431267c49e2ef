//! Configuration loading and representation.
//!
//! Loaded from environment variables with defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bibliotheca_core::{AppResult, InfrastructureError};

/// Environment variable naming the JSON data file.
pub const DATABASE_PATH_VAR: &str = "BIBLIOTHECA_DATABASE_PATH";

pub const DEFAULT_DATABASE_PATH: &str = "resources/data/database.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the JSON file holding the catalog.
    pub database_path: PathBuf,
}

impl Settings {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = match lookup(DATABASE_PATH_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => {
                tracing::warn!(
                    var = DATABASE_PATH_VAR,
                    default = DEFAULT_DATABASE_PATH,
                    "database path not set, using default"
                );
                PathBuf::from(DEFAULT_DATABASE_PATH)
            }
        };

        Self { database_path }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Create the directory the data file lives in.
    pub fn ensure_dirs(&self) -> AppResult<()> {
        let Some(parent) = self.database_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        std::fs::create_dir_all(parent).map_err(|e| {
            InfrastructureError::storage(format!("create {}: {e}", parent.display()))
        })?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_overrides_the_default_path() {
        let settings = Settings::from_lookup(|key| {
            (key == DATABASE_PATH_VAR).then(|| "/var/lib/library/books.json".to_string())
        });

        assert_eq!(settings.database_path(), Path::new("/var/lib/library/books.json"));
    }

    #[test]
    fn missing_or_blank_value_falls_back_to_default() {
        assert_eq!(Settings::from_lookup(|_| None), Settings::default());
        assert_eq!(
            Settings::from_lookup(|_| Some("  ".to_string())),
            Settings::default()
        );
    }

    #[test]
    fn ensure_dirs_creates_the_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path().join("resources").join("data").join("db.json"));

        settings.ensure_dirs().unwrap();

        assert!(dir.path().join("resources").join("data").is_dir());
        assert!(!settings.database_path().exists());
    }
}
