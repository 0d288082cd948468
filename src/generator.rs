//! Turns a finished [`Bump`] into a release section of the changelog file
//! for its major.minor version line.
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    ChangelogError, Result,
    bump::{Bump, LogEntry},
    changelog::{Changelog, Release, Renderer},
    config::Config,
};

/// The major.minor pair a version belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    pub major: String,
    pub minor: String,
}

impl VersionLine {
    /// Take the first two dot separated components of version. Patch and
    /// anything after it is ignored.
    pub fn parse(version: &str) -> Result<Self> {
        let mut parts = version.split('.');

        match (parts.next(), parts.next()) {
            (Some(major), Some(minor))
                if !major.is_empty() && !minor.is_empty() =>
            {
                Ok(Self {
                    major: major.to_string(),
                    minor: minor.to_string(),
                })
            }
            _ => Err(ChangelogError::InvalidVersion(version.to_string())),
        }
    }

    /// File name holding every release of this line, e.g. `2.3.x.md`.
    pub fn file_name(&self) -> String {
        format!("{}.{}.x.md", self.major, self.minor)
    }
}

/// Target file and the document loaded from it (or freshly created).
#[derive(Debug)]
pub struct ResolvedChangelog {
    pub path: PathBuf,
    pub changelog: Changelog,
}

/// An entry the release refused, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub entry: LogEntry,
    pub reason: String,
}

/// Outcome of applying a bump's entries to a release.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub applied: Vec<LogEntry>,
    pub skipped: Vec<SkippedEntry>,
}

/// Result of a completed generation.
#[derive(Debug)]
pub struct Generated {
    pub path: PathBuf,
    pub version: String,
    pub report: MergeReport,
}

/// Locate the changelog file for version, creating its directory if needed,
/// and load the existing document or start a new one.
pub fn resolve(config: &Config, version: &str) -> Result<ResolvedChangelog> {
    let line = VersionLine::parse(version)?;
    let path = config.directory.join(line.file_name());

    if !config.directory.exists() {
        info!("creating changelog directory {}", config.directory.display());
        fs::create_dir_all(&config.directory).map_err(|err| {
            error!(
                "❌ Failed to create directory {}: {err}",
                config.directory.display()
            );
            err
        })?;
    }

    if path.exists() {
        info!("loading existing changelog {}", path.display());
        let content = fs::read_to_string(&path)?;
        let changelog = Changelog::parse(&content)?;
        return Ok(ResolvedChangelog { path, changelog });
    }

    info!("starting new changelog {}", path.display());
    let changelog =
        Changelog::for_version_line(&config.title, &line.major, &line.minor);

    Ok(ResolvedChangelog { path, changelog })
}

/// Build the release for bump and add it to changelog. Entries the release
/// rejects are logged and reported as skipped; the rest are still applied.
pub fn merge(bump: &Bump, changelog: &mut Changelog) -> MergeReport {
    let date = bump.date.date_naive();
    let mut release = Release::new(&bump.version, Some(date));
    let mut report = MergeReport::default();

    for entry in bump.logs.iter() {
        let mutation = entry.change_type.mutation();

        match mutation(&mut release, &entry.description) {
            Ok(()) => {
                debug!("added release item: {entry}");
                report.applied.push(entry.clone());
            }
            Err(err) => {
                error!("❌ Failed to call release item: {entry}");
                error!("Error: {err}");
                report.skipped.push(SkippedEntry {
                    entry: entry.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    changelog.add_release(release);

    report
}

/// Render changelog and write it to path, replacing what was there.
pub fn persist(
    path: &Path,
    changelog: &Changelog,
    renderer: &Renderer,
) -> Result<()> {
    let content = renderer.render(changelog)?;

    fs::write(path, content).map_err(|err| {
        error!("❌ Error write file {}: {err}", path.display());
        err
    })?;

    Ok(())
}

/// Resolve, merge and persist bump. Does nothing and returns None when the
/// bump has no entries.
pub fn create_changelog(
    config: &Config,
    bump: &Bump,
) -> Result<Option<Generated>> {
    if bump.logs.is_empty() {
        debug!("no log entries collected, skipping changelog generation");
        return Ok(None);
    }

    let ResolvedChangelog {
        path,
        mut changelog,
    } = resolve(config, &bump.version)?;

    let report = merge(bump, &mut changelog);

    let renderer = Renderer::new(config.template.clone());
    persist(&path, &changelog, &renderer)?;

    info!(
        "wrote {} entries for {} to {}",
        report.applied.len(),
        bump.version,
        path.display()
    );

    Ok(Some(Generated {
        path,
        version: bump.version.clone(),
        report,
    }))
}

#[cfg(test)]
#[path = "./generator_tests.rs"]
mod tests;
