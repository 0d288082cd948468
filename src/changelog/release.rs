use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::{ChangelogError, Result, changelog::change_type::ChangeType};

/// Heading used for changes that are not released yet.
const UNRELEASED: &str = "Unreleased";

/// One version's section of a changelog: a version, an optional release
/// date and the change entries filed under each change type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    version: String,
    date: Option<NaiveDate>,
    yanked: bool,
    changes: BTreeMap<ChangeType, Vec<String>>,
}

impl Release {
    /// Create an empty release for version and date.
    pub fn new(version: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            version: version.into(),
            date,
            yanked: false,
            changes: BTreeMap::new(),
        }
    }

    /// Mark the release as pulled (`[YANKED]` after its heading).
    pub fn with_yanked(mut self, yanked: bool) -> Self {
        self.yanked = yanked;
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn yanked(&self) -> bool {
        self.yanked
    }

    /// True for the `[Unreleased]` section, matched case-insensitively.
    pub fn is_unreleased(&self) -> bool {
        self.version.eq_ignore_ascii_case(UNRELEASED)
    }

    /// Version parsed as semver, if it is one.
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(self.version.trim_start_matches('v')).ok()
    }

    /// Entries filed under change_type in insertion order.
    pub fn entries(&self, change_type: ChangeType) -> &[String] {
        self.changes
            .get(&change_type)
            .map(|entries| entries.as_slice())
            .unwrap_or_default()
    }

    /// Total number of entries across all change types.
    pub fn len(&self) -> usize {
        self.changes.values().map(|entries| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record a description under change_type.
    ///
    /// Multi-line descriptions are folded onto a single line so the entry
    /// stays one bullet. A description with no visible text is rejected.
    pub fn add(
        &mut self,
        change_type: ChangeType,
        description: &str,
    ) -> Result<()> {
        let description = description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>()
            .join(" ");

        if description.is_empty() {
            return Err(ChangelogError::EmptyDescription);
        }

        self.changes
            .entry(change_type)
            .or_default()
            .push(description);

        Ok(())
    }

    /// Append text to the last entry filed under change_type. Returns false
    /// when there is no entry to continue.
    pub fn continue_last(
        &mut self,
        change_type: ChangeType,
        text: &str,
    ) -> bool {
        let text = text.trim();

        let Some(last) = self
            .changes
            .get_mut(&change_type)
            .and_then(|entries| entries.last_mut())
        else {
            return false;
        };

        if !text.is_empty() {
            last.push(' ');
            last.push_str(text);
        }

        true
    }

    pub fn added(&mut self, description: &str) -> Result<()> {
        self.add(ChangeType::Added, description)
    }

    pub fn changed(&mut self, description: &str) -> Result<()> {
        self.add(ChangeType::Changed, description)
    }

    pub fn removed(&mut self, description: &str) -> Result<()> {
        self.add(ChangeType::Removed, description)
    }

    pub fn fixed(&mut self, description: &str) -> Result<()> {
        self.add(ChangeType::Fixed, description)
    }

    pub fn deprecated(&mut self, description: &str) -> Result<()> {
        self.add(ChangeType::Deprecated, description)
    }

    pub fn security(&mut self, description: &str) -> Result<()> {
        self.add(ChangeType::Security, description)
    }

    /// Fold another release of the same version into this one. Entries of
    /// other are appended after the existing ones and the later of the two
    /// dates wins.
    pub fn absorb(&mut self, other: Release) {
        for (change_type, entries) in other.changes {
            self.changes.entry(change_type).or_default().extend(entries);
        }

        self.date = match (self.date, other.date) {
            (Some(current), Some(incoming)) => Some(current.max(incoming)),
            (current, incoming) => incoming.or(current),
        };

        self.yanked |= other.yanked;
    }
}
