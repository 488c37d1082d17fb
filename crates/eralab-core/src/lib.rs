pub mod attachment;
pub mod catalog;
pub mod error;

// Re-export common error type
pub use error::CatalogError;

pub use attachment::Attachment;
pub use catalog::{CatalogStore, DatasetDraft, DatasetRecord, DurableMirror, matches_query};
