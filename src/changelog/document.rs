use serde::Serialize;
use std::cmp::Reverse;

use crate::{
    Result,
    changelog::{parser, release::Release, render::Renderer},
};

/// Default title of a freshly created changelog.
pub const DEFAULT_TITLE: &str = "Changelog";

/// Link reference definition written below the releases, e.g.
/// `[2.3.0]: https://example.com/compare/v2.2.0...v2.3.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A whole changelog file: title, free-form description, releases ordered
/// newest first (with `Unreleased` on top) and trailing link references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    title: String,
    description: String,
    releases: Vec<Release>,
    links: Vec<Link>,
}

impl Changelog {
    /// Create an empty changelog.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            releases: vec![],
            links: vec![],
        }
    }

    /// Create the empty changelog for a major.minor version line.
    pub fn for_version_line(title: &str, major: &str, minor: &str) -> Self {
        Self::new(
            title,
            format!(
                "All notable changes to {major}.{minor}.x version will be documented in this file."
            ),
        )
    }

    /// Parse a changelog from its markdown text.
    pub fn parse(content: &str) -> Result<Self> {
        let parsed = parser::parse(content)?;

        let mut changelog = Self::new(parsed.title, parsed.description);
        for release in parsed.releases {
            changelog.add_release(release);
        }
        for link in parsed.links {
            changelog.add_link(link.label, link.url);
        }

        Ok(changelog)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Add a link reference definition. A label that is already defined
    /// gets its url replaced.
    pub fn add_link(
        &mut self,
        label: impl Into<String>,
        url: impl Into<String>,
    ) {
        let label = label.into();
        let url = url.into();

        match self.links.iter_mut().find(|l| l.label == label) {
            Some(existing) => existing.url = url,
            None => self.links.push(Link { label, url }),
        }
    }

    /// Find the release recorded for version.
    pub fn release(&self, version: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.version() == version)
    }

    /// Add a release, keeping `Unreleased` on top and versioned releases
    /// newest first. A release whose version is already present is merged
    /// into the existing one.
    pub fn add_release(&mut self, release: Release) {
        if let Some(existing) = self
            .releases
            .iter_mut()
            .find(|r| r.version() == release.version())
        {
            existing.absorb(release);
            return;
        }

        self.releases.push(release);
        // stable: other non-semver versions keep their order at the end
        self.releases
            .sort_by_key(|r| (!r.is_unreleased(), Reverse(r.semver())));
    }

    /// Render the changelog with the default template.
    pub fn to_markdown(&self) -> Result<String> {
        Renderer::default().render(self)
    }
}
