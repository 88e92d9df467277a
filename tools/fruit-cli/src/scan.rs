//! Model manifest generation from the models directory.

use crate::listing::list_files;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fruit_shared::manifest::{format_size_kb, is_model_file, render_manifest_js};
use fruit_shared::{ManifestEntry, scan};
use rand::Rng;
use std::path::Path;
use tracing::info;

pub const MODEL_MANIFEST_TITLE: &str = "Auto-generated models list";

/// Scan `models_dir` and write the manifest to `manifest_path`.
///
/// A missing models directory is created and yields an empty manifest.
pub fn scan_models<R: Rng + ?Sized>(
    models_dir: &Path,
    manifest_path: &Path,
    rng: &mut R,
    generated_at: DateTime<Utc>,
) -> Result<Vec<ManifestEntry>> {
    info!("Scanning models in {:?}", models_dir);

    let listing = if models_dir.exists() {
        list_files(models_dir)?
    } else {
        info!("Creating {:?}", models_dir);
        std::fs::create_dir_all(models_dir)
            .with_context(|| format!("Failed to create {:?}", models_dir))?;
        Vec::new()
    };

    let entries = scan(&listing, rng);
    info!("Found {} models:", entries.len());
    for file in listing.iter().filter(|f| is_model_file(&f.file_name)) {
        info!("  - {} ({})", file.file_name, format_size_kb(file.size));
    }

    let js = render_manifest_js(MODEL_MANIFEST_TITLE, &entries, generated_at)?;
    crate::write_manifest(manifest_path, &js)?;
    info!("Generated {:?}", manifest_path);

    Ok(entries)
}
