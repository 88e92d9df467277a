//! fruit-cli library
//!
//! The `ar-fruits` commands as plain functions, so they can be driven from
//! tests without spawning the binary.

pub mod config;
pub mod images;
pub mod listing;
pub mod models;
pub mod scan;

use anyhow::{Context, Result};
use std::path::Path;

pub use config::{Config, FruitModel};
pub use images::{ImagesOutcome, generate_image_models};
pub use models::generate_models;
pub use scan::scan_models;

/// Outcome of a batch where single items may fail
#[derive(Debug)]
pub struct BatchReport<T> {
    pub written: Vec<T>,
    pub failed: usize,
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self {
            written: Vec::new(),
            failed: 0,
        }
    }
}

impl<T> BatchReport<T> {
    /// True when there was work and none of it succeeded
    pub fn all_failed(&self) -> bool {
        self.failed > 0 && self.written.is_empty()
    }
}

/// Write manifest text, creating the parent directory if needed
pub fn write_manifest(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))
}
