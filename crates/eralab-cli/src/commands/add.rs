use std::path::PathBuf;

use anyhow::Result;

use eralab_core::catalog::DatasetDraft;
use eralab_infrastructure::{EralabPaths, read_attachment};

pub struct AddArgs {
    pub title: String,
    pub category: Option<String>,
    pub authors: Option<String>,
    pub year: Option<String>,
    pub summary: Option<String>,
    pub file: Option<PathBuf>,
}

/// Adds a new entry, waiting for the attachment read before committing.
pub async fn run(paths: &EralabPaths, args: AddArgs) -> Result<()> {
    let attachment = match &args.file {
        Some(path) => Some(read_attachment(path).await?),
        None => None,
    };

    let draft = DatasetDraft {
        title: args.title,
        category: args.category,
        authors: args.authors,
        year: coerce_year(args.year.as_deref()),
        summary: args.summary,
    };

    let mut store = super::open_store(paths).await?;
    let records = store.add(draft, attachment).await?;
    let newest = &records[0];

    println!("Added \"{}\" ({})", newest.title, newest.id);
    if let Some(file_name) = newest.file_name.as_deref() {
        println!("Attached {}", file_name);
    }

    Ok(())
}

/// Coerces free-text year input to an integer; non-numeric input is
/// stored as absent rather than rejected.
fn coerce_year(year: Option<&str>) -> Option<i64> {
    year.and_then(|y| y.trim().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_year_parses_integers() {
        assert_eq!(coerce_year(Some("2024")), Some(2024));
        assert_eq!(coerce_year(Some(" 1999 ")), Some(1999));
    }

    #[test]
    fn test_coerce_year_drops_non_numeric_input() {
        assert_eq!(coerce_year(Some("twenty-twenty")), None);
        assert_eq!(coerce_year(Some("")), None);
        assert_eq!(coerce_year(None), None);
    }
}
