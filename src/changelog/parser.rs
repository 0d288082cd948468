//! Line-oriented parser for Keep a Changelog markdown.
//!
//! Recognizes:
//! - `# Title` on the first non-blank line
//! - free text up to the first release heading as the description
//! - `## [1.2.3] - 2024-01-15` or `## 1.2.3` release headings, optionally
//!   followed by `[YANKED]`
//! - `### Added` (and the other change types) category headings
//! - `- entry` or `* entry` bullets under a category
//! - indented lines continuing the previous bullet
//! - `[label]: url` link reference definitions after the first release
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    ChangelogError, Result,
    changelog::{change_type::ChangeType, document::Link, release::Release},
};

/// Matches `# Title`
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(.+?)\s*$").unwrap());

/// Matches `## [1.2.3] - 2024-01-15`, `## 1.2.3 - 2024-01-15`, `## [1.2.3]`
/// and any of those followed by `[YANKED]`
static RELEASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^##\s+\[?([^\[\]\s]+)\]?(?:\s+-\s+(\d{4}-\d{2}-\d{2}))?(\s+\[YANKED\])?\s*$",
    )
    .unwrap()
});

/// Matches `### Added`
static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(.+?)\s*$").unwrap());

/// Matches `- entry` and `* entry`
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.+)$").unwrap());

/// Matches `[2.3.0]: https://example.com/compare/v2.2.0...v2.3.0`
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]:\s*(\S+)\s*$").unwrap());

/// Raw pieces of a parsed changelog, releases in file order.
#[derive(Debug)]
pub struct ParsedChangelog {
    pub title: String,
    pub description: String,
    pub releases: Vec<Release>,
    pub links: Vec<Link>,
}

/// Parse changelog markdown into its title, description and releases.
pub fn parse(content: &str) -> Result<ParsedChangelog> {
    let mut title: Option<String> = None;
    let mut description: Vec<&str> = vec![];
    let mut releases: Vec<Release> = vec![];
    let mut links: Vec<Link> = vec![];
    let mut current_release: Option<Release> = None;
    let mut current_type: Option<ChangeType> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim_end();

        if let Some(captures) = RELEASE_REGEX.captures(trimmed) {
            if title.is_none() {
                return Err(ChangelogError::parse(
                    line_no,
                    "release heading found before changelog title",
                ));
            }

            if let Some(release) = current_release.take() {
                releases.push(release);
            }

            let date = captures
                .get(2)
                .map(|d| NaiveDate::parse_from_str(d.as_str(), "%Y-%m-%d"))
                .transpose()
                .map_err(|err| {
                    ChangelogError::parse(line_no, err.to_string())
                })?;

            let yanked = captures.get(3).is_some();
            current_release =
                Some(Release::new(&captures[1], date).with_yanked(yanked));
            current_type = None;
            continue;
        }

        if trimmed.starts_with("## ") {
            return Err(ChangelogError::parse(
                line_no,
                format!("unrecognized release heading: {trimmed}"),
            ));
        }

        if let Some(captures) = SECTION_REGEX.captures(trimmed) {
            if current_release.is_none() {
                return Err(ChangelogError::parse(
                    line_no,
                    "category heading found outside of a release",
                ));
            }

            let label = &captures[1];
            let change_type = ChangeType::from_label(label).ok_or_else(|| {
                ChangelogError::parse(
                    line_no,
                    format!("unknown change category: {label}"),
                )
            })?;

            current_type = Some(change_type);
            continue;
        }

        if let Some(release) = current_release.as_mut() {
            if trimmed.trim().is_empty() {
                continue;
            }

            if let Some(captures) = LINK_REGEX.captures(trimmed) {
                links.push(Link {
                    label: captures[1].to_string(),
                    url: captures[2].to_string(),
                });
                continue;
            }

            let Some(captures) = ENTRY_REGEX.captures(trimmed) else {
                let continued = trimmed.starts_with([' ', '\t'])
                    && current_type.is_some_and(|change_type| {
                        release.continue_last(change_type, trimmed)
                    });

                if continued {
                    continue;
                }

                return Err(ChangelogError::parse(
                    line_no,
                    format!("unexpected text inside release: {trimmed}"),
                ));
            };

            let change_type = current_type.ok_or_else(|| {
                ChangelogError::parse(
                    line_no,
                    "entry found outside of a change category",
                )
            })?;

            release.add(change_type, &captures[1]).map_err(|err| {
                ChangelogError::parse(line_no, err.to_string())
            })?;

            continue;
        }

        if title.is_some() {
            description.push(line);
            continue;
        }

        if let Some(captures) = TITLE_REGEX.captures(trimmed) {
            title = Some(captures[1].to_string());
            continue;
        }

        if !trimmed.trim().is_empty() {
            return Err(ChangelogError::parse(
                line_no,
                "expected changelog title",
            ));
        }
    }

    if let Some(release) = current_release.take() {
        releases.push(release);
    }

    let title = title.ok_or_else(|| {
        ChangelogError::parse(1, "changelog has no title heading")
    })?;

    Ok(ParsedChangelog {
        title,
        description: description.join("\n").trim().to_string(),
        releases,
        links,
    })
}

#[cfg(test)]
#[path = "./parser_tests.rs"]
mod tests;
