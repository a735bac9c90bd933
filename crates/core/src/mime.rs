//! The fixed extension → MIME table used for embedded figures.

use crate::error::{EnrichError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use std::path::Path;

/// Image extensions the embedder accepts, compared case-insensitively.
pub const IMAGE_TYPES: &[(&str, &str)] = &[
    ("gif", "image/gif"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
];

/// Looks up the MIME type for an image path by its extension.
pub fn mime_for_path(path: &str) -> Result<&'static str> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    IMAGE_TYPES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, mime)| *mime)
        .ok_or_else(|| EnrichError::UnknownExtension {
            path: path.to_string(),
            extension: extension.to_string(),
        })
}

/// `data:<mime>;base64,<payload>` for the given bytes.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes))
}
