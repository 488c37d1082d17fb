//! In-memory durable mirror for tests and ephemeral sessions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use eralab_core::catalog::DurableMirror;
use eralab_core::error::{CatalogError, Result};

/// A [`DurableMirror`] holding its value in memory.
///
/// Cloning shares the underlying slot, so a test can hold one handle while
/// the store owns another. `fail_next_writes` turns every subsequent write
/// into an error, for exercising persist-failure paths.
#[derive(Clone, Default)]
pub struct MemoryMirror {
    value: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mirror pre-populated with `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.into()))),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every following write fail with a data access error.
    pub fn fail_next_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the current slot contents.
    pub async fn contents(&self) -> Option<String> {
        self.value.lock().await.clone()
    }
}

#[async_trait]
impl DurableMirror for MemoryMirror {
    async fn read(&self) -> Result<Option<String>> {
        Ok(self.value.lock().await.clone())
    }

    async fn write(&self, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CatalogError::data_access("memory mirror write disabled"));
        }
        *self.value.lock().await = Some(value.to_string());
        Ok(())
    }

    async fn erase(&self) -> Result<()> {
        *self.value.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let mirror = MemoryMirror::new();
        let handle = mirror.clone();

        mirror.write("shared").await.unwrap();
        assert_eq!(handle.contents().await.as_deref(), Some("shared"));
    }

    #[tokio::test]
    async fn test_poisoned_write_errors_and_leaves_slot_intact() {
        let mirror = MemoryMirror::with_value("before");
        mirror.fail_next_writes(true);

        assert!(mirror.write("after").await.is_err());
        assert_eq!(mirror.contents().await.as_deref(), Some("before"));

        mirror.fail_next_writes(false);
        mirror.write("after").await.unwrap();
        assert_eq!(mirror.contents().await.as_deref(), Some("after"));
    }
}
