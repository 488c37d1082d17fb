use std::io::{self, BufRead, Write};

use anyhow::Result;

use eralab_infrastructure::EralabPaths;

/// Resets the local catalog after a confirmation prompt.
///
/// Clearing removes all locally saved entries and restores the sample
/// collection.
pub async fn run(paths: &EralabPaths, yes: bool) -> Result<()> {
    if !yes && !confirm()? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = super::open_store(paths).await?;
    let records = store.clear().await?;

    println!("Catalog reset to {} sample entries.", records.len());
    Ok(())
}

fn confirm() -> Result<bool> {
    print!("Clear local repository (this removes all locally saved entries)? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
