//! Reads an attachment file into memory for inline encoding.
//!
//! This is the add-flow's single asynchronous suspension point: the record
//! is only committed after the read completes.

use std::path::Path;

use tokio::fs;

use eralab_core::attachment::Attachment;
use eralab_core::error::{CatalogError, Result};

/// Reads the file at `path` and stages it as an [`Attachment`].
///
/// The media type is guessed from the file extension, falling back to
/// `application/octet-stream` for unknown extensions.
pub async fn read_attachment(path: &Path) -> Result<Attachment> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| CatalogError::io(format!("failed to read attachment {:?}: {}", path, e)))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("download")
        .to_string();

    let media_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(Attachment {
        file_name,
        media_type,
        bytes,
    })
}
