//! Inline attachment encoding.
//!
//! An uploaded file travels inside its dataset record as a single
//! `data:<media-type>;base64,<payload>` string, so the whole record fits
//! into one text value in the durable mirror. This costs roughly 33% size
//! inflation and is unsuitable for large files.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::error::{CatalogError, Result};

/// A file staged for inclusion in a dataset record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// Original filename
    pub file_name: String,
    /// MIME type of the file
    pub media_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Encodes the attachment bytes into a self-contained data URL.
    pub fn to_data_url(&self) -> String {
        encode_data_url(&self.media_type, &self.bytes)
    }
}

/// Encodes raw bytes as a `data:` URL with a base64 payload.
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, BASE64_STANDARD.encode(bytes))
}

/// Decodes a `data:` URL back into its media type and raw bytes.
///
/// # Returns
///
/// - `Ok((media_type, bytes))` on success
/// - `Err(CatalogError::Serialization)` if the string is not a base64 data
///   URL or the payload fails to decode
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>)> {
    let rest = data_url.strip_prefix("data:").ok_or_else(|| {
        CatalogError::Serialization {
            format: "data URL".to_string(),
            message: "missing 'data:' scheme".to_string(),
        }
    })?;

    let (media_type, payload) =
        rest.split_once(";base64,")
            .ok_or_else(|| CatalogError::Serialization {
                format: "data URL".to_string(),
                message: "missing ';base64,' separator".to_string(),
            })?;

    let bytes = BASE64_STANDARD
        .decode(payload)
        .map_err(|e| CatalogError::Serialization {
            format: "data URL".to_string(),
            message: format!("invalid base64 payload: {}", e),
        })?;

    Ok((media_type.to_string(), bytes))
}
