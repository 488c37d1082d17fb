use std::path::Path;

use anyhow::Result;
use tokio::fs;

use eralab_core::catalog::EXPORT_FILE_NAME;
use eralab_infrastructure::EralabPaths;

/// Writes the whole catalog to a pretty-printed JSON backup file.
pub async fn export(paths: &EralabPaths, out: Option<&Path>) -> Result<()> {
    let store = super::open_store(paths).await?;
    let snapshot = store.export_snapshot()?;

    let out = out.unwrap_or_else(|| Path::new(EXPORT_FILE_NAME));
    fs::write(out, snapshot).await?;

    println!(
        "Exported {} entries to {}",
        store.records().len(),
        out.display()
    );
    Ok(())
}

/// Replaces the catalog from a JSON backup file.
pub async fn import(paths: &EralabPaths, path: &Path) -> Result<()> {
    let document = fs::read_to_string(path).await?;

    let mut store = super::open_store(paths).await?;
    let records = store.import_snapshot(&document).await?;

    println!(
        "Imported {} entries (the catalog is stored locally)",
        records.len()
    );
    Ok(())
}
