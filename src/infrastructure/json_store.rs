// src/infrastructure/json_store.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace, warn};

/// A single JSON document on disk, replaced atomically on every save.
///
/// Saving writes to a temporary file next to the target and renames it over the
/// target, so an interrupted write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Copies an unreadable file to `<file>.corrupt` so the next full rewrite does not destroy it
    pub fn quarantine(&self) -> Option<PathBuf> {
        let mut target = self.path.as_os_str().to_owned();
        target.push(".corrupt");
        let target = PathBuf::from(target);
        match fs::copy(&self.path, &target) {
            Ok(_) => {
                warn!("Unreadable file copied to {}", target.display());
                Some(target)
            }
            Err(e) => {
                warn!("Failed to copy unreadable file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Reads and parses the document. `Ok(None)` if the file does not exist or holds `null`.
    #[instrument(level = "trace", skip(self), fields(path = %self.path.display()))]
    pub fn load<T: DeserializeOwned>(&self) -> DomainResult<Option<T>> {
        if !self.path.exists() {
            trace!("No file, nothing to load");
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let value: Option<T> = serde_json::from_str(&json).map_err(|e| {
            DomainError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(value)
    }

    /// Serializes as indented JSON and atomically replaces the file
    #[instrument(level = "debug", skip(self, value), fields(path = %self.path.display()))]
    pub fn save<T: Serialize + ?Sized>(&self, value: &T) -> DomainResult<()> {
        let json = serde_json::to_string_pretty(value)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                DomainError::Other(format!("Not a file path: {}", self.path.display()))
            })?;

        let mut tmp = tempfile::Builder::new()
            .prefix(&format!("{}.", file_name))
            .suffix(".tmp")
            .tempfile_in(&dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| DomainError::Io(e.error))?;

        debug!("Saved {} bytes", json.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        items: Vec<String>,
    }

    fn doc() -> Doc {
        Doc {
            name: "vault".to_string(),
            items: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn given_missing_file_when_load_then_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(store.load::<Doc>().unwrap().is_none());
    }

    #[test]
    fn given_saved_document_when_load_then_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/dir/doc.json"));

        store.save(&doc()).unwrap();

        assert_eq!(store.load::<Doc>().unwrap(), Some(doc()));
    }

    #[test]
    fn given_existing_file_when_save_then_replaced_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "old content").unwrap();
        let store = JsonFileStore::new(&path);

        store.save(&doc()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"vault\""));
        assert!(content.contains('\n'), "expected indented JSON");
        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1, "temporary file left behind");
    }

    #[test]
    fn given_null_document_when_load_then_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "null").unwrap();
        assert!(JsonFileStore::new(&path).load::<Doc>().unwrap().is_none());
    }

    #[test]
    fn given_corrupt_document_when_load_then_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFileStore::new(&path).load::<Doc>(),
            Err(DomainError::Serialization(_))
        ));
    }
}
