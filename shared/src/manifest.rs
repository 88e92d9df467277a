//! Model and image manifests consumed by the front-end.
//!
//! A manifest is a JavaScript file defining `const IMAGES = [...]`. The list is
//! built from a directory listing by a pure function so it can be tested
//! without touching the filesystem.

use crate::naming::{extension, format_display_name, model_id};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Model file extensions picked up by [`scan`]
pub const MODEL_EXTENSIONS: &[&str] = &["glb", "gltf"];

/// Site-relative directory of model files
pub const MODELS_URL_DIR: &str = "assets/models";
/// Site-relative directory of source images
pub const IMAGES_URL_DIR: &str = "assets/img";

/// Card colours assigned to scanned models
pub const CARD_PALETTE: [&str; 15] = [
    "#ff6b6b", "#ffd93d", "#ff9f43", "#ee5a5a", "#f8d56b", "#26de81", "#a55eea", "#c4e538",
    "#7bed9f", "#ffa502", "#45aaf2", "#fd79a8", "#6c5ce7", "#00cec9", "#e17055",
];

/// Error type for manifest rendering.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to serialize manifest entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Serialized manifest is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One file of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub file_name: String,
    pub size: u64,
}

impl DirEntryInfo {
    pub fn new(file_name: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size,
        }
    }
}

/// A selectable model card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub model: String,
    pub color: String,
}

/// An image paired with the plane model generated from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    pub path: String,
    pub model: String,
}

impl ImageEntry {
    /// Entry for `image_file` whose model was written as `model_file`
    pub fn new(image_file: &str, model_file: &str) -> Self {
        Self {
            name: image_file.to_string(),
            path: format!("{IMAGES_URL_DIR}/{image_file}"),
            model: format!("{MODELS_URL_DIR}/{model_file}"),
        }
    }
}

/// True if `file_name` has one of [`MODEL_EXTENSIONS`]
pub fn is_model_file(file_name: &str) -> bool {
    extension(file_name).is_some_and(|ext| MODEL_EXTENSIONS.contains(&ext.as_str()))
}

/// Build manifest entries for every model file in `listing`.
///
/// Non-model files are skipped. Entries are ordered by file name; the card
/// colour is drawn from [`CARD_PALETTE`] with `rng`.
pub fn scan<R: Rng + ?Sized>(listing: &[DirEntryInfo], rng: &mut R) -> Vec<ManifestEntry> {
    let mut models: Vec<&DirEntryInfo> = listing
        .iter()
        .filter(|entry| is_model_file(&entry.file_name))
        .collect();
    models.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    models
        .into_iter()
        .map(|entry| ManifestEntry {
            id: model_id(&entry.file_name),
            name: format_display_name(&entry.file_name),
            model: format!("{MODELS_URL_DIR}/{}", entry.file_name),
            color: CARD_PALETTE[rng.random_range(0..CARD_PALETTE.len())].to_string(),
        })
        .collect()
}

/// Size as shown in logs, e.g. `"12.5 KB"`
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Render entries as the `images.js` data file.
///
/// `title` goes into the header comment next to the generation time.
pub fn render_manifest_js<T: Serialize>(
    title: &str,
    entries: &[T],
    generated_at: DateTime<Utc>,
) -> Result<String, ManifestError> {
    let mut json = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut json, formatter);
    entries.serialize(&mut serializer)?;
    let json = String::from_utf8(json)?;

    Ok(format!(
        "/**
 * {title}
 * Generated: {timestamp}
 * Run 'ar-fruits scan' to regenerate
 */

const IMAGES = {json};

// Export for use
if (typeof module !== 'undefined') {{
    module.exports = IMAGES;
}}
",
        timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    ))
}
