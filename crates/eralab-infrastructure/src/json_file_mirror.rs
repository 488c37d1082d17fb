//! File-backed durable mirror.
//!
//! The whole serialized collection lives in a single JSON file, one value
//! under one fixed key.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use eralab_core::catalog::DurableMirror;
use eralab_core::error::{CatalogError, Result};

use crate::paths::EralabPaths;

/// A [`DurableMirror`] persisting its value to one file on disk.
pub struct JsonFileMirror {
    path: PathBuf,
}

impl JsonFileMirror {
    /// Creates a mirror over the standard mirror file for `paths`.
    pub fn new(paths: &EralabPaths) -> Self {
        Self {
            path: paths.mirror_path(),
        }
    }

    /// Creates a mirror over an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DurableMirror for JsonFileMirror {
    async fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => {
                debug!(path = %self.path.display(), bytes = raw.len(), "read mirror file");
                Ok(Some(raw))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CatalogError::data_access(format!(
                "failed to read mirror file {:?}: {}",
                self.path, e
            ))),
        }
    }

    async fn write(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                CatalogError::data_access(format!(
                    "failed to create data directory {:?}: {}",
                    parent, e
                ))
            })?;
        }
        fs::write(&self.path, value).await.map_err(|e| {
            CatalogError::data_access(format!(
                "failed to write mirror file {:?}: {}",
                self.path, e
            ))
        })?;
        debug!(path = %self.path.display(), bytes = value.len(), "wrote mirror file");
        Ok(())
    }

    async fn erase(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CatalogError::data_access(format!(
                "failed to erase mirror file {:?}: {}",
                self.path, e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eralab_core::catalog::CatalogStore;
    use tempfile::TempDir;

    fn mirror_in(dir: &TempDir) -> JsonFileMirror {
        let paths = EralabPaths::new(Some(dir.path())).unwrap();
        JsonFileMirror::new(&paths)
    }

    #[tokio::test]
    async fn test_read_absent_file_is_none() {
        let dir = TempDir::new().unwrap();
        let mirror = mirror_in(&dir);
        assert!(mirror.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let mirror = mirror_in(&dir);

        mirror.write("[1,2,3]").await.unwrap();
        assert_eq!(mirror.read().await.unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[tokio::test]
    async fn test_write_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        let paths = EralabPaths::new(Some(&nested)).unwrap();
        let mirror = JsonFileMirror::new(&paths);

        mirror.write("[]").await.unwrap();
        assert!(nested.join("era_lab_repo_v1.json").exists());
    }

    #[tokio::test]
    async fn test_erase_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mirror = mirror_in(&dir);

        // Erasing before any write must not error
        mirror.erase().await.unwrap();

        mirror.write("x").await.unwrap();
        mirror.erase().await.unwrap();
        assert!(mirror.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_over_file_mirror_seeds_and_persists() {
        let dir = TempDir::new().unwrap();

        {
            let mut store = CatalogStore::open(mirror_in(&dir)).await.unwrap();
            assert_eq!(store.records().len(), 3);
            store
                .add(
                    eralab_core::catalog::DatasetDraft {
                        title: "Air Quality Sensor Network".to_string(),
                        ..Default::default()
                    },
                    None,
                )
                .await
                .unwrap();
        }

        // A second store over the same directory sees the persisted entry
        let store = CatalogStore::open(mirror_in(&dir)).await.unwrap();
        assert_eq!(store.records().len(), 4);
        assert_eq!(store.records()[0].title, "Air Quality Sensor Network");
    }

    #[tokio::test]
    async fn test_store_recovers_from_corrupt_file_on_disk() {
        let dir = TempDir::new().unwrap();
        let paths = EralabPaths::new(Some(dir.path())).unwrap();
        std::fs::create_dir_all(paths.base_dir()).unwrap();
        std::fs::write(paths.mirror_path(), "not { valid json").unwrap();

        let store = CatalogStore::open(mirror_in(&dir)).await.unwrap();
        assert_eq!(store.records().len(), 3);

        // The corrupt file was replaced with a parseable seed
        let raw = std::fs::read_to_string(paths.mirror_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }
}
