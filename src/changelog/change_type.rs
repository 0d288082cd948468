use crate::{Result, changelog::release::Release};

/// Mutation applied to a release for one change description.
pub type ReleaseMutation = fn(&mut Release, &str) -> Result<()>;

/// Categories a change entry can be filed under, following the Keep a
/// Changelog vocabulary. Variant order is the menu order presented to the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeType {
    Added,
    Changed,
    Removed,
    Fixed,
    Deprecated,
    Security,
}

impl ChangeType {
    /// All change types in menu order.
    pub const ALL: [ChangeType; 6] = [
        ChangeType::Added,
        ChangeType::Changed,
        ChangeType::Removed,
        ChangeType::Fixed,
        ChangeType::Deprecated,
        ChangeType::Security,
    ];

    /// Order in which sections are written inside a release.
    pub const RENDER_ORDER: [ChangeType; 6] = [
        ChangeType::Added,
        ChangeType::Changed,
        ChangeType::Deprecated,
        ChangeType::Removed,
        ChangeType::Fixed,
        ChangeType::Security,
    ];

    /// Numeric key used to pick this type from the menu (1-6).
    pub fn key(&self) -> u8 {
        match self {
            ChangeType::Added => 1,
            ChangeType::Changed => 2,
            ChangeType::Removed => 3,
            ChangeType::Fixed => 4,
            ChangeType::Deprecated => 5,
            ChangeType::Security => 6,
        }
    }

    /// Section heading label.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Changed => "Changed",
            ChangeType::Removed => "Removed",
            ChangeType::Fixed => "Fixed",
            ChangeType::Deprecated => "Deprecated",
            ChangeType::Security => "Security",
        }
    }

    /// Release operation that records a description under this type.
    pub fn mutation(&self) -> ReleaseMutation {
        match self {
            ChangeType::Added => Release::added,
            ChangeType::Changed => Release::changed,
            ChangeType::Removed => Release::removed,
            ChangeType::Fixed => Release::fixed,
            ChangeType::Deprecated => Release::deprecated,
            ChangeType::Security => Release::security,
        }
    }

    /// Resolve a menu answer to a change type. Surrounding whitespace is
    /// ignored; anything that isn't one of the keys yields None.
    pub fn from_key(answer: &str) -> Option<Self> {
        let key = answer.trim().parse::<u8>().ok()?;
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Resolve a section heading (case-insensitive) to a change type.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label))
    }
}
