use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::error::Category;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use bibliotheca_catalog::BookRecord;
use bibliotheca_core::{AppResult, InfrastructureError};

use super::r#trait::BookStore;

/// Book store backed by a single JSON file.
///
/// The file holds one JSON array of [`BookRecord`]s, UTF-8, pretty printed
/// with a 4-space indent. Every save writes a sibling temporary file and
/// renames it over the target, so readers see either the old or the new
/// catalog in full.
///
/// A missing file loads as an empty catalog. So does a file that is not JSON
/// at all: the problem is logged and the next commit replaces it. Well-formed
/// JSON holding records of the wrong shape is an error, and nothing is
/// written over it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn encode(records: &[BookRecord]) -> AppResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut ser)
            .map_err(|e| InfrastructureError::serialization(e.to_string()))?;
        buf.push(b'\n');
        Ok(buf)
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn storage_error(&self, action: &str, e: impl std::fmt::Display) -> InfrastructureError {
        InfrastructureError::storage(format!("{action} {}: {e}", self.path.display()))
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> AppResult<Vec<BookRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.storage_error("read", e).into()),
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) if matches!(e.classify(), Category::Syntax | Category::Eof) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "undecodable data file, starting from an empty catalog"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(InfrastructureError::serialization(format!(
                "decode {}: {e}",
                self.path.display()
            ))
            .into()),
        }
    }

    fn save(&mut self, records: &[BookRecord]) -> AppResult<()> {
        let bytes = Self::encode(records)?;

        let dir = self.dir();
        fs::create_dir_all(dir).map_err(|e| {
            InfrastructureError::storage(format!("create {}: {e}", dir.display()))
        })?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.storage_error("stage", e))?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.storage_error("write", e))?;
        tmp.persist(&self.path).map_err(|e| self.storage_error("replace", e.error))?;

        Ok(())
    }
}
