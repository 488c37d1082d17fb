//! The catalog store.
//!
//! Owns the resident in-memory collection and keeps it mirrored into a
//! [`DurableMirror`] after every mutation. The store has one steady state
//! (a resident collection) and two ways into it: seed-on-missing-or-corrupt
//! and replace-on-import.

use tracing::{debug, warn};
use uuid::Uuid;

use super::mirror::DurableMirror;
use super::model::{DatasetDraft, DatasetRecord, seed_records};
use crate::attachment::Attachment;
use crate::error::{CatalogError, Result};

/// The canonical in-memory collection of dataset records plus its durable
/// mirror.
///
/// Mutations update memory first, then persist. There is no rollback: a
/// failed persist leaves memory ahead of the mirror until the next
/// successful save or reload.
pub struct CatalogStore<M: DurableMirror> {
    records: Vec<DatasetRecord>,
    mirror: M,
}

impl<M: DurableMirror> CatalogStore<M> {
    /// Opens a store over the given mirror, running the load-or-seed path.
    pub async fn open(mirror: M) -> Result<Self> {
        let mut store = Self {
            records: Vec::new(),
            mirror,
        };
        store.load().await?;
        Ok(store)
    }

    /// Loads the collection from the mirror.
    ///
    /// An absent mirror is seeded with the fixed sample collection. A
    /// present-but-unparseable mirror is discarded and reseeded the same
    /// way; parse corruption never surfaces to the caller.
    pub async fn load(&mut self) -> Result<&[DatasetRecord]> {
        self.records = match self.mirror.read().await? {
            Some(raw) => match serde_json::from_str::<Vec<DatasetRecord>>(&raw) {
                Ok(records) => {
                    debug!(count = records.len(), "loaded catalog from mirror");
                    records
                }
                Err(e) => {
                    warn!(error = %e, "stored catalog is unreadable, reseeding");
                    self.mirror.erase().await?;
                    self.write_seed().await?
                }
            },
            None => self.write_seed().await?,
        };
        Ok(&self.records)
    }

    /// Writes the fixed seed collection to the mirror and returns it.
    async fn write_seed(&self) -> Result<Vec<DatasetRecord>> {
        let seed = seed_records();
        self.mirror.write(&serde_json::to_string(&seed)?).await?;
        debug!(count = seed.len(), "seeded catalog mirror");
        Ok(seed)
    }

    /// The resident collection, most-recent-first.
    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    /// Overwrites the mirror with the resident collection.
    ///
    /// Write failures (e.g. storage quota) propagate uncaught.
    pub async fn save(&self) -> Result<()> {
        self.mirror
            .write(&serde_json::to_string(&self.records)?)
            .await
    }

    /// Creates a record from `draft`, prepends it and persists.
    ///
    /// A fresh UUID is assigned; the attachment, if any, is encoded into
    /// the record as a data URL so that `file_name` and `file_data_url`
    /// are either both present or both absent.
    ///
    /// # Returns
    ///
    /// The updated collection, with the new record first.
    pub async fn add(
        &mut self,
        draft: DatasetDraft,
        attachment: Option<Attachment>,
    ) -> Result<&[DatasetRecord]> {
        let (file_name, file_data_url) = match &attachment {
            Some(a) => (Some(a.file_name.clone()), Some(a.to_data_url())),
            None => (None, None),
        };

        let record = DatasetRecord {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            category: draft.category,
            authors: draft.authors,
            year: draft.year,
            summary: draft.summary,
            file_name,
            file_data_url,
        };

        self.records.insert(0, record);
        self.save().await?;
        Ok(&self.records)
    }

    /// Erases the mirror and reruns the load path.
    ///
    /// Note: this restores the fixed sample collection rather than leaving
    /// an empty catalog; callers always get a renderable collection back.
    pub async fn clear(&mut self) -> Result<&[DatasetRecord]> {
        self.mirror.erase().await?;
        self.load().await
    }

    /// Serializes the resident collection as a pretty-printed snapshot
    /// document. Pure; no effect on the store.
    pub fn export_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Parses a snapshot document and wholesale-replaces the collection.
    ///
    /// The top level must be an ordered sequence; otherwise the operation
    /// fails with [`CatalogError::ImportFormat`] and the resident
    /// collection is left untouched. Individual records are not validated.
    pub async fn import_snapshot(&mut self, document: &str) -> Result<&[DatasetRecord]> {
        let value: serde_json::Value = serde_json::from_str(document)
            .map_err(|e| CatalogError::import_format(format!("not valid JSON: {}", e)))?;

        let serde_json::Value::Array(items) = value else {
            return Err(CatalogError::import_format(
                "top level must be an ordered sequence of records",
            ));
        };

        // Per-record shape is deliberately not validated; anything in the
        // sequence that is not even an object becomes a defaulted record
        let records: Vec<DatasetRecord> = items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect();

        self.records = records;
        self.save().await?;
        Ok(&self.records)
    }

    /// Returns the first record with the given id, if any. Linear scan;
    /// catalogs are human-curated and small.
    pub fn find(&self, id: &str) -> Option<&DatasetRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}
