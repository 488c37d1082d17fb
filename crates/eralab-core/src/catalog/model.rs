//! Dataset record model and seed data.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Fixed key identifying this application's slot in the durable mirror.
pub const STORAGE_KEY: &str = "era_lab_repo_v1";

/// Default filename for exported snapshots.
pub const EXPORT_FILE_NAME: &str = "era_lab_repository_backup.json";

/// A single catalog entry describing a research dataset.
///
/// The serialized shape (camelCase keys, explicit nulls for absent
/// optionals) is the wire format of both the durable mirror and the
/// export/import snapshot documents.
///
/// Imported documents are accepted without per-record validation: every
/// field carries a default and deserializes leniently, so missing keys and
/// wrong-typed values materialize as defaulted fields and surface only as
/// rendering anomalies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetRecord {
    /// Opaque unique identifier, assigned at creation and stable after
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    /// Display title
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    /// Free-text category label
    #[serde(deserialize_with = "lenient_opt_string")]
    pub category: Option<String>,
    /// Free-text author list
    #[serde(deserialize_with = "lenient_opt_string")]
    pub authors: Option<String>,
    /// Publication year, unvalidated
    #[serde(deserialize_with = "lenient_opt_year")]
    pub year: Option<i64>,
    /// Free-text summary
    #[serde(deserialize_with = "lenient_opt_string")]
    pub summary: Option<String>,
    /// Original filename of the attachment, present iff one was supplied
    #[serde(deserialize_with = "lenient_opt_string")]
    pub file_name: Option<String>,
    /// Data-URL encoding of the attachment bytes, paired with `file_name`
    #[serde(deserialize_with = "lenient_opt_string")]
    pub file_data_url: Option<String>,
}

/// Accepts any JSON value where a string is expected; non-string scalars
/// keep their display form, anything else degrades to empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Accepts any JSON value where an optional string is expected.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts any JSON value where a year is expected; non-integer values
/// degrade to absent.
fn lenient_opt_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_i64(),
        _ => None,
    })
}

impl DatasetRecord {
    /// Whether this record carries an inline attachment.
    pub fn has_attachment(&self) -> bool {
        self.file_data_url.is_some()
    }
}

/// The record-without-id accepted by the add operation.
#[derive(Debug, Clone, Default)]
pub struct DatasetDraft {
    pub title: String,
    pub category: Option<String>,
    pub authors: Option<String>,
    pub year: Option<i64>,
    pub summary: Option<String>,
}

/// Builds the fixed seed collection used whenever no valid persisted
/// collection exists. Ids are freshly assigned per call; contents are
/// otherwise constant.
pub fn seed_records() -> Vec<DatasetRecord> {
    vec![
        DatasetRecord {
            id: Uuid::new_v4().to_string(),
            title: "Arsenic in Potable Water Sources in Nigeria".to_string(),
            category: Some("Water Quality".to_string()),
            authors: Some("Amaefule, E.O. et al.".to_string()),
            year: Some(2025),
            summary: Some(
                "Systematic review and geospatial analysis of arsenic contamination \
                 across Nigerian water sources."
                    .to_string(),
            ),
            file_name: None,
            file_data_url: None,
        },
        DatasetRecord {
            id: Uuid::new_v4().to_string(),
            title: "Energy Justice and Gender Dimensions in Nigeria's Renewable Energy Transition"
                .to_string(),
            category: Some("Energy Justice".to_string()),
            authors: Some("ERA-Lab Research Fellows".to_string()),
            year: Some(2024),
            summary: Some(
                "Examines the gendered and social dimensions of renewable energy policies \
                 and access in Ekiti State."
                    .to_string(),
            ),
            file_name: None,
            file_data_url: None,
        },
        DatasetRecord {
            id: Uuid::new_v4().to_string(),
            title: "Flood Risk Management and Socioeconomic Resilience in Lagos".to_string(),
            category: Some("Climate Adaptation".to_string()),
            authors: Some("ERA-Lab Urban Systems Team".to_string()),
            year: Some(2025),
            summary: Some(
                "Community-based mapping and framework development for flood risk and \
                 resilience in Lagos metropolis."
                    .to_string(),
            ),
            file_name: None,
            file_data_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_camel_case_and_explicit_nulls() {
        let record = DatasetRecord {
            id: "abc".to_string(),
            title: "Soil Salinity Survey".to_string(),
            category: None,
            authors: None,
            year: Some(2023),
            summary: None,
            file_name: None,
            file_data_url: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fileName"], serde_json::Value::Null);
        assert_eq!(json["fileDataUrl"], serde_json::Value::Null);
        assert_eq!(json["year"], 2023);
        // Keys are present even when null, matching the persisted shape
        assert!(json.as_object().unwrap().contains_key("summary"));
    }

    #[test]
    fn test_lenient_deserialization_of_sparse_record() {
        // A record missing every expected key still deserializes
        let record: DatasetRecord = serde_json::from_str(r#"{"unknownKey": 42}"#).unwrap();
        assert!(record.id.is_empty());
        assert!(record.title.is_empty());
        assert!(record.year.is_none());
    }

    #[test]
    fn test_wrong_typed_fields_degrade_instead_of_failing() {
        let record: DatasetRecord = serde_json::from_str(
            r#"{"id": 7, "title": ["not", "text"], "authors": 12, "year": "abc", "summary": null}"#,
        )
        .unwrap();
        assert_eq!(record.id, "7");
        assert!(record.title.is_empty());
        assert_eq!(record.authors.as_deref(), Some("12"));
        assert!(record.year.is_none());
        assert!(record.summary.is_none());
    }

    #[test]
    fn test_fractional_year_degrades_to_absent() {
        let record: DatasetRecord =
            serde_json::from_str(r#"{"title": "t", "year": 2024.5}"#).unwrap();
        assert!(record.year.is_none());
    }

    #[test]
    fn test_seed_records_are_three_without_attachments() {
        let seed = seed_records();
        assert_eq!(seed.len(), 3);
        assert!(seed.iter().all(|r| !r.has_attachment()));
        assert!(seed.iter().any(|r| r.title.contains("Flood")));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let seed = seed_records();
        assert_ne!(seed[0].id, seed[1].id);
        assert_ne!(seed[1].id, seed[2].id);
    }
}
