//! Interactive question/answer loop that collects change entries.
//!
//! Each step returns the next one and [`Session::run`] drives them in a
//! plain loop until [`Step::End`] is reached.
use log::*;

use crate::{
    Result,
    bump::{Bump, LogEntry},
    changelog::ChangeType,
    prompt::Prompter,
};

pub const BANNER: &str = "Changelog Generation\n";
pub const CHANGE_TYPES_HEADER: &str = "Change Types: ";
pub const CHOOSE_CHANGE_TYPE: &str = "Choose change type, Please type number: ";
pub const WRONG_CHANGE_TYPE: &str = "Wrong log type!";
pub const DESCRIBE_CHANGE: &str = "Describe the change (eg: New Home UI): ";
pub const DESCRIBE_OK: &str = "OK!";
pub const ADD_MORE: &str = "Add more log? Please type [y/n]: ";

/// States of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Start,
    ChooseChangeType,
    DescribeLogChange(ChangeType),
    NewLog,
    End,
}

/// Drives the prompt steps, accumulating entries into a [`Bump`].
pub struct Session<'p, P: Prompter> {
    prompter: &'p mut P,
    bump: Bump,
}

impl<'p, P: Prompter> Session<'p, P> {
    pub fn new(prompter: &'p mut P, bump: Bump) -> Self {
        Self { prompter, bump }
    }

    /// Entries collected so far.
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Run every step from [`Step::Start`] until [`Step::End`] and hand back
    /// the bump with all collected entries.
    pub fn run(mut self) -> Result<Bump> {
        let mut step = Step::Start;

        while step != Step::End {
            debug!("session step: {step:?}");
            step = self.step(step)?;
        }

        info!(
            "session finished with {} log entries for version {}",
            self.bump.logs.len(),
            self.bump.version
        );

        Ok(self.bump)
    }

    /// Execute a single step and return the one to run next.
    pub fn step(&mut self, step: Step) -> Result<Step> {
        match step {
            Step::Start => self.start(),
            Step::ChooseChangeType => self.choose_change_type(),
            Step::DescribeLogChange(change_type) => {
                self.describe_log_change(change_type)
            }
            Step::NewLog => self.new_log(),
            Step::End => Ok(Step::End),
        }
    }

    fn start(&mut self) -> Result<Step> {
        self.prompter.say(BANNER)?;
        Ok(Step::ChooseChangeType)
    }

    fn choose_change_type(&mut self) -> Result<Step> {
        self.prompter.say(CHANGE_TYPES_HEADER)?;
        for change_type in ChangeType::ALL {
            let line = format!("{}. {}", change_type.key(), change_type.label());
            self.prompter.say(&line)?;
        }

        let answer = self.prompter.ask(CHOOSE_CHANGE_TYPE)?;

        match ChangeType::from_key(&answer) {
            Some(change_type) => Ok(Step::DescribeLogChange(change_type)),
            None => {
                debug!("rejected change type answer: {answer:?}");
                self.prompter.say(WRONG_CHANGE_TYPE)?;
                Ok(Step::ChooseChangeType)
            }
        }
    }

    fn describe_log_change(
        &mut self,
        change_type: ChangeType,
    ) -> Result<Step> {
        let description = self.prompter.ask(DESCRIBE_CHANGE)?;
        self.bump.push(LogEntry::new(change_type, description));
        self.prompter.say(DESCRIBE_OK)?;
        Ok(Step::NewLog)
    }

    fn new_log(&mut self) -> Result<Step> {
        let answer = self.prompter.ask(ADD_MORE)?;

        if answer.trim().eq_ignore_ascii_case("y") {
            return Ok(Step::ChooseChangeType);
        }

        Ok(Step::End)
    }
}

#[cfg(test)]
#[path = "./session_tests.rs"]
mod tests;
