//! User interface abstraction for the interactive session.

use crate::models::Record;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// What the session needs from a front end.
pub trait UserInterface {
    /// Show the list of available commands.
    fn display_commands(&mut self) -> io::Result<()>;

    /// Show a group of contacts, one per line.
    fn display_contacts(&mut self, contacts: &[&Record]) -> io::Result<()>;

    /// Show a one-line status or error message.
    fn display_message(&mut self, message: &str) -> io::Result<()>;

    /// Ask for one line of input. `None` means the input is exhausted.
    fn get_user_input(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line-oriented console front end over any reader/writer pair.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
}

impl ConsoleUi<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleUi<R, W> {
    fn display_commands(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available commands:")?;
        writeln!(self.output, "1. Add a contact")?;
        writeln!(self.output, "2. Search for a contact")?;
        writeln!(self.output, "3. Show all contacts")?;
        writeln!(self.output, "4. Edit a phone number")?;
        writeln!(self.output, "5. Delete a contact")?;
        writeln!(self.output, "6. Exit")
    }

    fn display_contacts(&mut self, contacts: &[&Record]) -> io::Result<()> {
        for contact in contacts {
            writeln!(self.output, "{}", contact)?;
        }
        Ok(())
    }

    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn get_user_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
