//! Image MIME types accepted for embedded textures

use crate::GlbError;
use std::fmt;

/// Extensions (without the dot) that map to a known image MIME type
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// MIME type written into the glTF `images[].mimeType` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl MimeType {
    pub fn as_str(self) -> &'static str {
        match self {
            MimeType::Jpeg => "image/jpeg",
            MimeType::Png => "image/png",
            MimeType::Gif => "image/gif",
            MimeType::Webp => "image/webp",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a file extension to its MIME type.
///
/// Accepts the extension with or without a leading dot, in any case.
/// Unknown extensions are rejected rather than defaulted.
pub fn extension_to_mime(ext: &str) -> Result<MimeType, GlbError> {
    let normalized = ext.trim_start_matches('.').to_ascii_lowercase();
    match normalized.as_str() {
        "jpg" | "jpeg" => Ok(MimeType::Jpeg),
        "png" => Ok(MimeType::Png),
        "gif" => Ok(MimeType::Gif),
        "webp" => Ok(MimeType::Webp),
        _ => Err(GlbError::UnsupportedAssetKind(format!(
            "image extension {ext:?}"
        ))),
    }
}
