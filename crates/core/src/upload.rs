//! Filename validation and generation for the image upload store.
//!
//! Uploaded files are always stored under a generated UUID-based name so
//! uploads can neither overwrite each other nor smuggle path components
//! into the store.

use uuid::Uuid;

use crate::error::CoreError;

/// Supported image file extensions (lowercase).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Extract and validate the extension of an uploaded filename.
///
/// Returns the lowercase extension when it is on the allow-list.
pub fn image_extension(filename: &str) -> Result<String, CoreError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if ext.is_empty() || !ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "File type not allowed. Allowed types: {}",
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        )));
    }

    Ok(ext)
}

/// Generate a globally-unique stored filename for an upload with the given
/// (already validated) extension.
pub fn stored_image_filename(extension: &str) -> String {
    format!("{}.{extension}", Uuid::new_v4())
}

/// Whether a filename is safe to look up in the upload store.
///
/// Rejects empty names and anything carrying path separators or parent
/// directory components.
pub fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}
