//! Common test helper functions shared across test modules.
use chrono::{DateTime, TimeZone, Utc};
use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{
    ChangelogError,
    bump::{Bump, LogEntry},
    changelog::ChangeType,
    config::Config,
    prompt::MockPrompter,
};

/// Every question asked and every line said, in order.
pub type Transcript = Arc<Mutex<Vec<String>>>;

/// Creates a MockPrompter that answers questions from answers in order and
/// reports closed input once they run out.
///
/// # Example
/// ```ignore
/// let (mut prompter, transcript) = scripted_prompter(&["1", "New UI", "n"]);
/// ```
pub fn scripted_prompter(answers: &[&str]) -> (MockPrompter, Transcript) {
    let transcript: Transcript = Arc::new(Mutex::new(vec![]));
    let mut prompter = MockPrompter::new();

    let said = transcript.clone();
    prompter.expect_say().returning(move |message| {
        said.lock().unwrap().push(message.to_string());
        Ok(())
    });

    let asked = transcript.clone();
    let mut answers = answers
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<String>>()
        .into_iter();
    prompter.expect_ask().returning(move |question| {
        asked.lock().unwrap().push(question.to_string());
        answers.next().ok_or(ChangelogError::InputClosed)
    });

    (prompter, transcript)
}

/// Number of transcript lines equal to line.
pub fn count_lines(transcript: &Transcript, line: &str) -> usize {
    transcript
        .lock()
        .unwrap()
        .iter()
        .filter(|l| l.as_str() == line)
        .count()
}

/// Fixed timestamp used for deterministic release dates (2024-06-09).
pub fn test_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 9, 12, 0, 0).unwrap()
}

/// Creates a Bump for version holding the given entries.
pub fn create_test_bump(version: &str, logs: &[(ChangeType, &str)]) -> Bump {
    let mut bump = Bump::with_date(version, test_date());
    for (change_type, description) in logs {
        bump.push(LogEntry::new(*change_type, *description));
    }
    bump
}

/// Creates a Config writing changelogs to root/changelogs.
pub fn create_test_config(root: &Path) -> Config {
    Config {
        directory: root.join("changelogs"),
        manifest: root.join("package.json"),
        ..Default::default()
    }
}
