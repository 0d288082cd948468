//! Configuration loading and parsing for optional `changelog.toml` files.
//!
//! Every field has a default so running without a config file works.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

use crate::{
    Result,
    changelog::{document::DEFAULT_TITLE, render::DEFAULT_TEMPLATE},
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "changelog.toml";

/// Directory holding one changelog file per major.minor version line.
pub const DEFAULT_CHANGELOG_DIR: &str = "changelogs";

/// Manifest the release version is read from.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Root configuration structure for `changelog.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct Config {
    /// Directory changelog files are written to.
    pub directory: PathBuf,
    /// Project manifest holding the version (package.json or Cargo.toml).
    pub manifest: PathBuf,
    /// Title used when a new changelog file is created.
    pub title: String,
    /// Tera template used to render changelog files.
    pub template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CHANGELOG_DIR),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            title: DEFAULT_TITLE.into(),
            template: DEFAULT_TEMPLATE.into(),
        }
    }
}

impl Config {
    /// Load configuration from path, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        info!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
