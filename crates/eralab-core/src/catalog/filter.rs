//! Free-text filtering over the catalog.

use super::model::DatasetRecord;

/// Case-insensitive substring match over `title`, `category` and `authors`.
///
/// An empty (or whitespace-only) query matches every record.
pub fn matches_query(record: &DatasetRecord, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }

    let hit = |field: &str| field.to_lowercase().contains(&q);

    hit(&record.title)
        || record.category.as_deref().is_some_and(hit)
        || record.authors.as_deref().is_some_and(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::seed_records;

    #[test]
    fn test_flood_query_matches_exactly_one_seed_record() {
        let seed = seed_records();
        let hits: Vec<_> = seed.iter().filter(|r| matches_query(r, "flood")).collect();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].title.contains("Flood"));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let seed = seed_records();
        assert!(seed.iter().any(|r| matches_query(r, "ENERGY JUSTICE")));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let seed = seed_records();
        assert!(seed.iter().all(|r| matches_query(r, "")));
        assert!(seed.iter().all(|r| matches_query(r, "   ")));
    }

    #[test]
    fn test_query_checks_authors_field() {
        let seed = seed_records();
        let hits: Vec<_> = seed
            .iter()
            .filter(|r| matches_query(r, "amaefule"))
            .collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_missing_optional_fields_do_not_match() {
        let record = DatasetRecord {
            id: "x".to_string(),
            title: "Untitled".to_string(),
            ..Default::default()
        };
        assert!(!matches_query(&record, "water"));
    }
}
