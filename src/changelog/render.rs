//! Tera based rendering of a changelog back to markdown.
use serde::Serialize;

use crate::{
    Result,
    changelog::{
        change_type::ChangeType,
        document::{Changelog, Link},
    },
};

/// Default changelog template.
pub const DEFAULT_TEMPLATE: &str = r#"# {{ title }}

{{ description }}
{% for release in releases %}
## [{{ release.version }}]{% if release.date %} - {{ release.date }}{% endif %}{% if release.yanked %} [YANKED]{% endif %}
{% for section in release.sections %}### {{ section.label }}
{% for entry in section.entries %}- {{ entry }}
{% endfor %}{% endfor %}{% endfor %}
{% for link in links %}[{{ link.label }}]: {{ link.url }}
{% endfor %}
"#;

#[derive(Serialize)]
struct SectionContext<'a> {
    label: &'static str,
    entries: &'a [String],
}

#[derive(Serialize)]
struct ReleaseContext<'a> {
    version: &'a str,
    date: Option<String>,
    yanked: bool,
    sections: Vec<SectionContext<'a>>,
}

#[derive(Serialize)]
struct ChangelogContext<'a> {
    title: &'a str,
    description: &'a str,
    releases: Vec<ReleaseContext<'a>>,
    links: &'a [Link],
}

impl<'a> From<&'a Changelog> for ChangelogContext<'a> {
    fn from(changelog: &'a Changelog) -> Self {
        let releases = changelog
            .releases()
            .iter()
            .map(|release| ReleaseContext {
                version: release.version(),
                date: release.date().map(|d| d.format("%Y-%m-%d").to_string()),
                yanked: release.yanked(),
                sections: ChangeType::RENDER_ORDER
                    .into_iter()
                    .map(move |change_type| SectionContext {
                        label: change_type.label(),
                        entries: release.entries(change_type),
                    })
                    .filter(|section| !section.entries.is_empty())
                    .collect(),
            })
            .collect();

        Self {
            title: changelog.title(),
            description: changelog.description(),
            releases,
            links: changelog.links(),
        }
    }
}

/// Renders changelogs through a tera template.
#[derive(Debug, Clone)]
pub struct Renderer {
    template: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Renderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render changelog to markdown ending in a single newline.
    pub fn render(&self, changelog: &Changelog) -> Result<String> {
        let context =
            tera::Context::from_serialize(ChangelogContext::from(changelog))?;
        let output = tera::Tera::one_off(&self.template, &context, false)?;
        Ok(collapse_blank_lines(&output))
    }
}

// Template tags leave uneven blank lines behind; keep at most one between
// blocks and end with exactly one newline.
fn collapse_blank_lines(output: &str) -> String {
    let mut markdown = String::with_capacity(output.len());
    let mut previous_blank = false;

    for line in output.trim().lines() {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }

        markdown.push_str(if blank { "" } else { line });
        markdown.push('\n');
        previous_blank = blank;
    }

    markdown
}
