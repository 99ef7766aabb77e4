use address_book::{Record, UserInterface};
use std::collections::VecDeque;
use std::io;

/// User interface double that replays canned answers and records output.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedUi {
    answers: VecDeque<String>,
    /// Messages shown via `display_message`, in order.
    pub messages: Vec<String>,
    /// Every contact line shown via `display_contacts`, in order.
    pub contacts: Vec<String>,
    /// Number of `display_contacts` calls (one per page or search result).
    pub contact_batches: usize,
    /// Prompts that were asked.
    pub prompts: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedUi {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Whether any shown message contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for ScriptedUi {
    fn display_commands(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn display_contacts(&mut self, contacts: &[&Record]) -> io::Result<()> {
        self.contact_batches += 1;
        self.contacts
            .extend(contacts.iter().map(|c| c.name().as_str().to_string()));
        Ok(())
    }

    fn display_message(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn get_user_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
