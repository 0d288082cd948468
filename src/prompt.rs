//! Terminal input/output used by the interactive session.
use std::io::{BufRead, Write};

use crate::{ChangelogError, Result};

/// Source of answers and sink for messages during a session.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Print a line of output.
    fn say(&mut self, message: &str) -> Result<()>;

    /// Print question without a trailing newline and wait for one line of
    /// input. The returned answer has its line ending removed.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompter over a buffered reader and a writer, normally stdin/stdout.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            return Err(ChangelogError::InputClosed);
        }

        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn ask_writes_question_and_strips_line_ending() {
        let mut output = vec![];
        let mut prompter =
            TerminalPrompter::new(Cursor::new("  3 \r\n"), &mut output);

        let answer = prompter.ask("Pick: ").unwrap();
        drop(prompter);

        assert_eq!(answer, "  3 ");
        assert_eq!(String::from_utf8(output).unwrap(), "Pick: ");
    }

    #[test]
    fn ask_reads_one_line_at_a_time() {
        let mut prompter =
            TerminalPrompter::new(Cursor::new("first\nsecond\n"), vec![]);

        assert_eq!(prompter.ask("").unwrap(), "first");
        assert_eq!(prompter.ask("").unwrap(), "second");
    }

    #[test]
    fn ask_on_closed_input_is_an_error() {
        let mut prompter = TerminalPrompter::new(Cursor::new(""), vec![]);
        let result = prompter.ask("Add more log? ");
        assert!(matches!(result, Err(ChangelogError::InputClosed)));
    }

    #[test]
    fn last_line_without_newline_is_returned() {
        let mut prompter = TerminalPrompter::new(Cursor::new("y"), vec![]);
        assert_eq!(prompter.ask("").unwrap(), "y");
    }

    #[test]
    fn say_writes_full_line() {
        let mut output = vec![];
        let mut prompter = TerminalPrompter::new(Cursor::new(""), &mut output);

        prompter.say("OK!").unwrap();
        drop(prompter);

        assert_eq!(String::from_utf8(output).unwrap(), "OK!\n");
    }
}
