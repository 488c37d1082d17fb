use anyhow::Result;
use colored::Colorize;

use eralab_core::CatalogError;
use eralab_infrastructure::EralabPaths;

/// Prints the detail view for one entry, or a not-found notice.
pub async fn run(paths: &EralabPaths, id: &str) -> Result<()> {
    let store = super::open_store(paths).await?;

    let record = store
        .find(id)
        .ok_or_else(|| CatalogError::not_found("dataset", id))?;

    println!("{}: {}", "Title".bold(), record.title);
    println!("{}: {}", "Authors".bold(), record.authors.as_deref().unwrap_or(""));
    println!(
        "{}: {}",
        "Year".bold(),
        record.year.map(|y| y.to_string()).unwrap_or_default()
    );
    println!("{}: {}", "Category".bold(), record.category.as_deref().unwrap_or(""));
    println!();
    println!("{}:", "Summary".bold());
    println!("{}", record.summary.as_deref().unwrap_or("(none)"));

    if let Some(file_name) = record.file_name.as_deref() {
        println!();
        println!("{}: {}", "Attachment".bold(), file_name);
    }

    Ok(())
}
