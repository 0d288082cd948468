//! In-memory record of one authoring session.
use chrono::{DateTime, Utc};
use std::fmt;

use crate::changelog::ChangeType;

/// A single change collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub change_type: ChangeType,
    pub description: String,
}

impl LogEntry {
    pub fn new(
        change_type: ChangeType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            change_type,
            description: description.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.change_type.label(), self.description)
    }
}

/// The version being released, when the session started, and the entries
/// collected so far.
#[derive(Debug, Clone)]
pub struct Bump {
    pub version: String,
    pub date: DateTime<Utc>,
    pub logs: Vec<LogEntry>,
}

impl Bump {
    /// Start a bump for version stamped with the current time. Release
    /// dates are taken in UTC so every machine writes the same day.
    pub fn new(version: impl Into<String>) -> Self {
        Self::with_date(version, Utc::now())
    }

    pub fn with_date(
        version: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            version: version.into(),
            date,
            logs: vec![],
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.logs.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_displays_label_and_description() {
        let entry = LogEntry::new(ChangeType::Deprecated, "old endpoint");
        assert_eq!(entry.to_string(), "Deprecated: old endpoint");
    }

    #[test]
    fn new_bump_starts_without_logs() {
        let bump = Bump::new("1.0.0");
        assert_eq!(bump.version, "1.0.0");
        assert!(bump.logs.is_empty());
    }

    #[test]
    fn new_bump_is_stamped_now_in_utc() {
        let before = Utc::now();
        let bump = Bump::new("1.0.0");
        assert!(bump.date >= before && bump.date <= Utc::now());
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut bump = Bump::new("1.0.0");
        bump.push(LogEntry::new(ChangeType::Fixed, "one"));
        bump.push(LogEntry::new(ChangeType::Added, "two"));

        let descriptions = bump
            .logs
            .iter()
            .map(|l| l.description.as_str())
            .collect::<Vec<&str>>();

        assert_eq!(descriptions, vec!["one", "two"]);
    }
}
