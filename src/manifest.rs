//! Reads the release version from the project manifest.
use log::*;
use serde_json::Value;
use std::{fs, path::Path};

use crate::{ChangelogError, Result};

/// Project manifest the release version comes from. `package.json` is the
/// default; a path ending in `.toml` is read as a `Cargo.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub version: String,
}

impl Manifest {
    /// Load the manifest at path and extract its version.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            ChangelogError::manifest_version(
                path.display().to_string(),
                err.to_string(),
            )
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let version = if is_toml {
            Self::version_from_cargo_toml(&content)
        } else {
            Self::version_from_package_json(&content)
        }
        .map_err(|err| {
            ChangelogError::manifest_version(
                path.display().to_string(),
                err.to_string(),
            )
        })?;

        let version = version.ok_or_else(|| {
            ChangelogError::manifest_version(
                path.display().to_string(),
                "no version field found",
            )
        })?;

        info!("found version {version} in {}", path.display());

        Ok(Self { version })
    }

    fn version_from_package_json(content: &str) -> Result<Option<String>> {
        let doc: Value = serde_json::from_str(content)?;
        Ok(doc
            .get("version")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string()))
    }

    fn version_from_cargo_toml(content: &str) -> Result<Option<String>> {
        let doc: toml::Table = toml::from_str(content)?;

        let package_version = doc
            .get("package")
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str());

        if let Some(version) = package_version {
            return Ok(Some(version.to_string()));
        }

        debug!("no package.version, checking workspace.package.version");

        Ok(doc
            .get("workspace")
            .and_then(|w| w.get("package"))
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
            .map(|v| v.to_string()))
    }
}
