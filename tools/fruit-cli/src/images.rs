//! Image-plane models: every picture in the images directory becomes a
//! textured quad GLB, and the image manifest lists the pairs.

use crate::BatchReport;
use crate::listing::list_files;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fruit_shared::ImageEntry;
use fruit_shared::manifest::render_manifest_js;
use fruit_shared::naming::{extension, file_stem};
use glb_builder::{PlaneDescription, SUPPORTED_IMAGE_EXTENSIONS, encode_plane, extension_to_mime};
use std::path::Path;
use tracing::{error, info};

pub const IMAGE_MANIFEST_TITLE: &str = "Auto-generated image list with AR models";

/// Result of an `images` run
#[derive(Debug)]
pub enum ImagesOutcome {
    /// The images directory did not exist and was created empty
    CreatedImageDir,
    Generated(BatchReport<ImageEntry>),
}

/// True if `file_name` is an image the plane encoder accepts
pub fn is_image_file(file_name: &str) -> bool {
    extension(file_name).is_some_and(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Wrap one image file in a plane GLB written to `<models_dir>/<stem>.glb`
pub fn write_image_model(image_path: &Path, models_dir: &Path) -> Result<ImageEntry> {
    let file_name = image_path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Not a UTF-8 file name: {:?}", image_path))?;
    let ext = extension(file_name).unwrap_or_default();
    let mime_type = extension_to_mime(&ext)?;

    let bytes =
        std::fs::read(image_path).with_context(|| format!("Failed to read {:?}", image_path))?;
    let plane = PlaneDescription::new(bytes, mime_type)?;
    let glb = encode_plane(&plane)?;

    let model_file = format!("{}.glb", file_stem(file_name));
    let model_path = models_dir.join(&model_file);
    std::fs::write(&model_path, glb).with_context(|| format!("Failed to write {:?}", model_path))?;

    Ok(ImageEntry::new(file_name, &model_file))
}

/// Generate plane models for `images_dir` and write the manifest.
///
/// A missing images directory is created and nothing else happens.
pub fn generate_image_models(
    images_dir: &Path,
    models_dir: &Path,
    manifest_path: &Path,
    generated_at: DateTime<Utc>,
) -> Result<ImagesOutcome> {
    if !images_dir.exists() {
        info!("Creating {:?}", images_dir);
        std::fs::create_dir_all(images_dir)
            .with_context(|| format!("Failed to create {:?}", images_dir))?;
        info!("Add images to {:?} and run this command again.", images_dir);
        return Ok(ImagesOutcome::CreatedImageDir);
    }

    std::fs::create_dir_all(models_dir)
        .with_context(|| format!("Failed to create {:?}", models_dir))?;

    let mut report = BatchReport::default();
    for file in list_files(images_dir)? {
        if !is_image_file(&file.file_name) {
            continue;
        }
        info!("Processing: {}", file.file_name);
        match write_image_model(&images_dir.join(&file.file_name), models_dir) {
            Ok(entry) => {
                info!("Created: {}", entry.model);
                report.written.push(entry);
            }
            Err(err) => {
                error!("{}: {:#}", file.file_name, err);
                report.failed += 1;
            }
        }
    }

    let js = render_manifest_js(IMAGE_MANIFEST_TITLE, &report.written, generated_at)?;
    crate::write_manifest(manifest_path, &js)?;
    info!(
        "Generated {} AR models, updated {:?}",
        report.written.len(),
        manifest_path
    );

    Ok(ImagesOutcome::Generated(report))
}
