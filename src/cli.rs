//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

use crate::{
    Result,
    config::{Config, DEFAULT_CONFIG_FILE},
};

/// Interactively record categorized changes into a Keep a Changelog file
/// for the current project version.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    /// Optional TOML config file. Ignored when it does not exist.
    pub config: PathBuf,

    #[arg(long)]
    /// Project manifest to read the version from (package.json or
    /// Cargo.toml). Overrides the config file.
    pub manifest: Option<PathBuf>,

    #[arg(long)]
    /// Directory changelog files are written to. Overrides the config file.
    pub dir: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Load the config file and apply command line overrides on top.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config)?;

        if let Some(manifest) = &self.manifest {
            config.manifest = manifest.clone();
        }

        if let Some(dir) = &self.dir {
            config.directory = dir.clone();
        }

        Ok(config)
    }
}
