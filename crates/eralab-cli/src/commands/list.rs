use anyhow::Result;
use colored::Colorize;

use eralab_core::catalog::matches_query;
use eralab_infrastructure::EralabPaths;

/// Renders the (optionally filtered) catalog as a list of cards.
pub async fn run(paths: &EralabPaths, query: Option<&str>) -> Result<()> {
    let store = super::open_store(paths).await?;
    let query = query.unwrap_or("");

    let filtered: Vec<_> = store
        .records()
        .iter()
        .filter(|r| matches_query(r, query))
        .collect();

    if filtered.is_empty() {
        println!("No datasets found.");
        return Ok(());
    }

    for record in filtered {
        println!("{}", record.title.bold());

        let year = record.year.map(|y| y.to_string()).unwrap_or_default();
        let authors = record.authors.as_deref().unwrap_or("");
        println!("  {}", format!("{} • {}", authors, year).dimmed());

        if let Some(summary) = record.summary.as_deref() {
            println!("  {}", summary);
        }
        if let Some(category) = record.category.as_deref() {
            println!("  {}", format!("[{}]", category).cyan());
        }
        if let Some(file_name) = record.file_name.as_deref() {
            println!("  {} {}", "attachment:".green(), file_name);
        }
        println!("  {} {}", "id:".dimmed(), record.id.dimmed());
        println!();
    }

    Ok(())
}
