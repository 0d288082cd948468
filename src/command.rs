//! Entry point tying the session to changelog generation.
use log::*;
use std::io;

use crate::{
    Result,
    bump::Bump,
    cli::Args,
    config::Config,
    generator::{self, Generated},
    manifest::Manifest,
    prompt::{Prompter, TerminalPrompter},
    session::Session,
};

/// Read the project version, run an interactive session on the terminal and
/// write the collected entries to the changelog.
pub fn execute(args: &Args) -> Result<()> {
    let config = args.resolve_config()?;
    debug!("resolved configuration: {config:#?}");

    let manifest = Manifest::load(&config.manifest)?;
    let bump = Bump::new(manifest.version);

    let stdin = io::stdin();
    let mut prompter = TerminalPrompter::new(stdin.lock(), io::stdout());

    run(&config, bump, &mut prompter)?;

    Ok(())
}

/// Run the session to completion, then generate the changelog and report
/// the outcome through prompter.
pub fn run<P: Prompter>(
    config: &Config,
    bump: Bump,
    prompter: &mut P,
) -> Result<Option<Generated>> {
    let bump = Session::new(&mut *prompter, bump).run()?;

    let generated = generator::create_changelog(config, &bump)?;

    if let Some(generated) = &generated {
        prompter.say(&format!(
            "✅ Changelog from {} has been created!",
            generated.version
        ))?;

        for skipped in generated.report.skipped.iter() {
            prompter.say(&format!(
                "⚠️ Skipped {}: {}",
                skipped.entry, skipped.reason
            ))?;
        }
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        ChangelogError,
        changelog::{ChangeType, Changelog},
        test_helpers::{create_test_bump, create_test_config, scripted_prompter},
    };

    #[test]
    fn session_answers_end_up_in_version_line_file() {
        let tmp = TempDir::new().unwrap();
        let config = create_test_config(tmp.path());
        let (mut prompter, transcript) =
            scripted_prompter(&["1", "X", "y", "4", "Typo in footer", "n"]);

        let generated =
            run(&config, create_test_bump("2.3.1", &[]), &mut prompter)
                .unwrap()
                .unwrap();

        assert_eq!(generated.path, config.directory.join("2.3.x.md"));

        let content = fs::read_to_string(&generated.path).unwrap();
        let changelog = Changelog::parse(&content).unwrap();
        let release = changelog.release("2.3.1").unwrap();
        assert_eq!(release.entries(ChangeType::Added), ["X"]);
        assert_eq!(release.entries(ChangeType::Fixed), ["Typo in footer"]);

        let lines = transcript.lock().unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "✅ Changelog from 2.3.1 has been created!"
        );
    }

    #[test]
    fn skipped_entries_are_reported_after_success() {
        let tmp = TempDir::new().unwrap();
        let config = create_test_config(tmp.path());
        let (mut prompter, transcript) =
            scripted_prompter(&["4", "  ", "y", "1", "Kept", "n"]);

        let generated =
            run(&config, create_test_bump("1.0.0", &[]), &mut prompter)
                .unwrap()
                .unwrap();

        assert_eq!(generated.report.skipped.len(), 1);

        let lines = transcript.lock().unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "⚠️ Skipped Fixed:   : Change description must not be empty"
        );
    }

    #[test]
    fn interrupted_session_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = create_test_config(tmp.path());
        let (mut prompter, _) = scripted_prompter(&["1", "X"]);

        let result =
            run(&config, create_test_bump("2.3.1", &[]), &mut prompter);

        assert!(matches!(result, Err(ChangelogError::InputClosed)));
        assert!(!config.directory.exists());
    }
}
