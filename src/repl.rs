//! The interactive read-execute-print loop.
//!
//! This is the thin I/O shell around the core pipeline: it feeds raw
//! lines into the parser, hands the resulting command to the executor,
//! and prints the reply. The loop is generic over its reader and writer
//! so sessions can be scripted in tests without a terminal.

use crate::command;
use crate::executor::ContactBook;
use std::io::{self, BufRead, Write};

/// One interactive session over a pair of I/O handles.
pub struct ReplSession<R, W> {
    reader: R,
    writer: W,
    prompt: String,
    book: ContactBook,
}

impl<R: BufRead, W: Write> ReplSession<R, W> {
    /// Create a session with an empty contact book.
    pub fn new(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            prompt: prompt.into(),
            book: ContactBook::new(),
        }
    }

    /// Run the session to completion.
    ///
    /// One cycle per line: prompt, read, parse, execute, reply. The loop
    /// survives every command failure; it ends on an `exit` command or
    /// at end-of-input, whichever comes first.
    ///
    /// # Errors
    ///
    /// Only I/O errors on the session's own handles are propagated;
    /// command outcomes never are.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("Session started");

        let mut line = String::new();
        loop {
            write!(self.writer, "{}", self.prompt)?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                // End-of-input: terminate without a farewell.
                tracing::info!("Session ended at end-of-input");
                break;
            }

            let input = line.trim_end_matches(['\r', '\n']);
            let outcome = self.book.execute(command::parse(input));
            writeln!(self.writer, "{}", outcome.message())?;

            if outcome.is_terminal() {
                tracing::info!("Session ended by exit command");
                break;
            }
        }

        Ok(())
    }

    /// The contact book driven by this session.
    pub fn book(&self) -> &ContactBook {
        &self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut output = Vec::new();
        let mut session = ReplSession::new(Cursor::new(script.to_string()), &mut output, "> ");
        session.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_ends_on_exit_with_farewell() {
        let output = run_session("exit\n");
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_session_ends_at_end_of_input_without_farewell() {
        let output = run_session("help\n");
        assert!(output.contains("Available commands"));
        assert!(!output.contains("Goodbye."));
    }

    #[test]
    fn test_session_stops_reading_after_exit() {
        let output = run_session("exit\nadd Alice phone +111\n");
        assert!(!output.contains("Added"));
    }

    #[test]
    fn test_session_survives_invalid_input() {
        let output = run_session("add Bob phone 12345\nnonsense\nadd Alice phone +111\nexit\n");
        assert!(output.contains("invalid phone format"));
        assert!(output.contains("Available commands"));
        assert!(output.contains("Added phone +111 to Alice."));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_session_writes_prompt_each_cycle() {
        let mut output = Vec::new();
        let mut session =
            ReplSession::new(Cursor::new("help\nexit\n".to_string()), &mut output, "% ");
        session.run().unwrap();
        let output = String::from_utf8(output).unwrap();
        // One prompt per command cycle, none after the farewell.
        assert_eq!(output.matches("% ").count(), 2);
    }

    #[test]
    fn test_session_handles_crlf_line_endings() {
        let output = run_session("add Alice phone +111\r\nexit\r\n");
        assert!(output.contains("Added phone +111 to Alice."));
    }
}
