pub mod add;
pub mod clear;
pub mod list;
pub mod show;
pub mod snapshot;

use anyhow::Result;

use eralab_core::catalog::CatalogStore;
use eralab_infrastructure::{EralabPaths, JsonFileMirror};

/// Opens the catalog store over the file mirror for `paths`.
pub async fn open_store(paths: &EralabPaths) -> Result<CatalogStore<JsonFileMirror>> {
    let mirror = JsonFileMirror::new(paths);
    Ok(CatalogStore::open(mirror).await?)
}
