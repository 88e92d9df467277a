//! Tool configuration
//!
//! Parses `ar-fruits.toml`. Every section is optional; command-line flags
//! override whatever the file says.

use anyhow::{Context, Result};
use fruit_shared::FRUITS;
use glb_builder::sphere::{DEFAULT_RADIUS, DEFAULT_RINGS, DEFAULT_SEGMENTS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "ar-fruits.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub sphere: SphereConfig,
    /// Overrides the built-in catalog when non-empty
    pub fruits: Vec<FruitModel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub models: PathBuf,
    pub images: PathBuf,
    pub manifest: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            models: PathBuf::from("assets/models"),
            images: PathBuf::from("assets/img"),
            manifest: PathBuf::from("js/images.js"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub segments: u32,
    pub rings: u32,
    pub radius: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            rings: DEFAULT_RINGS,
            radius: DEFAULT_RADIUS,
        }
    }
}

/// One sphere model to generate
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FruitModel {
    /// Output file stem
    pub name: String,
    pub color: [f32; 3],
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config: {:?}", path))
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    ///
    /// An explicitly given file must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    tracing::debug!("Using {}", DEFAULT_CONFIG_FILE);
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Sphere models to generate: the configured list or the built-in catalog
    pub fn fruit_models(&self) -> Vec<FruitModel> {
        if !self.fruits.is_empty() {
            return self.fruits.clone();
        }
        FRUITS
            .iter()
            .map(|fruit| FruitModel {
                name: fruit.id.to_string(),
                color: fruit.model_color,
            })
            .collect()
    }
}
