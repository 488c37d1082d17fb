pub mod filter;
pub mod mirror;
pub mod model;
pub mod store;

pub use filter::matches_query;
pub use mirror::DurableMirror;
pub use model::{DatasetDraft, DatasetRecord, EXPORT_FILE_NAME, STORAGE_KEY, seed_records};
pub use store::CatalogStore;
