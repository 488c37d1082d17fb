//! Centralized path resolution for the catalog's on-disk data.

use std::path::{Path, PathBuf};

use eralab_core::catalog::STORAGE_KEY;
use eralab_core::error::{CatalogError, Result};

/// Resolves where the catalog keeps its durable mirror.
///
/// By default this is `<config_dir>/eralab/`; a custom base directory can
/// be supplied for testing or for the CLI's `--data-dir` flag.
#[derive(Debug, Clone)]
pub struct EralabPaths {
    base_dir: PathBuf,
}

impl EralabPaths {
    /// Creates a path resolver, using `base_dir` when given and the
    /// platform config directory otherwise.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` if no base directory was supplied
    /// and the platform config directory cannot be determined.
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or_else(|| CatalogError::config("cannot determine config directory"))?
                .join("eralab"),
        };
        Ok(Self { base_dir })
    }

    /// The directory holding all catalog data.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The file backing the durable mirror.
    pub fn mirror_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", STORAGE_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_path_uses_storage_key() {
        let paths = EralabPaths::new(Some(Path::new("/tmp/eralab-test"))).unwrap();
        assert_eq!(
            paths.mirror_path(),
            PathBuf::from("/tmp/eralab-test/era_lab_repo_v1.json")
        );
    }
}
