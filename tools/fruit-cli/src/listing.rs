//! Directory listings fed to the pure manifest functions.

use anyhow::{Context, Result};
use fruit_shared::DirEntryInfo;
use std::path::Path;
use walkdir::WalkDir;

/// Regular files directly inside `dir`, sorted by file name
pub fn list_files(dir: &Path) -> Result<Vec<DirEntryInfo>> {
    let mut listing = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let size = entry
            .metadata()
            .with_context(|| format!("Failed to stat {:?}", entry.path()))?
            .len();
        listing.push(DirEntryInfo::new(
            entry.file_name().to_string_lossy().into_owned(),
            size,
        ));
    }

    Ok(listing)
}
