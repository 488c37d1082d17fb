//! Durable mirror trait.
//!
//! Defines the interface for the single-value persistence slot backing the
//! catalog.

use crate::error::Result;

/// An abstract single-key durable mirror of the catalog.
///
/// This trait defines the contract for persisting the serialized collection,
/// decoupling the store from the specific storage mechanism (e.g., a JSON
/// file on disk, an in-memory value for tests).
#[async_trait::async_trait]
pub trait DurableMirror: Send + Sync {
    /// Reads the persisted value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: The currently persisted serialized collection
    /// - `Ok(None)`: Nothing has been persisted yet
    /// - `Err(CatalogError)`: Error if the read fails
    async fn read(&self) -> Result<Option<String>>;

    /// Overwrites the persisted value.
    async fn write(&self, value: &str) -> Result<()>;

    /// Removes the persisted value. Erasing an absent value is not an error.
    async fn erase(&self) -> Result<()>;
}
