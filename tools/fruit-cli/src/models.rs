//! Placeholder sphere models, one GLB per fruit.

use crate::BatchReport;
use crate::config::{FruitModel, SphereConfig};
use anyhow::{Context, Result};
use fruit_shared::manifest::format_size_kb;
use glb_builder::{MeshDescription, encode_sphere};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Encode and write one fruit's sphere to `<output_dir>/<name>.glb`
pub fn write_fruit_model(
    fruit: &FruitModel,
    sphere: &SphereConfig,
    output_dir: &Path,
) -> Result<PathBuf> {
    let mesh = MeshDescription::sphere(sphere.radius, sphere.segments, sphere.rings, fruit.color)
        .with_context(|| format!("Invalid sphere for {}", fruit.name))?;
    let glb = encode_sphere(&mesh).with_context(|| format!("Failed to encode {}", fruit.name))?;

    let path = output_dir.join(format!("{}.glb", fruit.name));
    std::fs::write(&path, &glb).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Created {}.glb ({})", fruit.name, format_size_kb(glb.len() as u64));
    Ok(path)
}

/// Generate every fruit model into `output_dir`, creating it if needed.
///
/// A failing fruit is logged and skipped.
pub fn generate_models(
    fruits: &[FruitModel],
    sphere: &SphereConfig,
    output_dir: &Path,
) -> Result<BatchReport<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {:?}", output_dir))?;

    info!("Generating {} fruit models...", fruits.len());
    let mut report = BatchReport::default();
    for fruit in fruits {
        match write_fruit_model(fruit, sphere, output_dir) {
            Ok(path) => report.written.push(path),
            Err(err) => {
                error!("{}: {:#}", fruit.name, err);
                report.failed += 1;
            }
        }
    }

    info!("Output directory: {:?}", output_dir);
    Ok(report)
}
