//! Interactive command loop.

use super::ui::UserInterface;
use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::PersistenceResult;
use crate::models::{AddressBook, Record};
use crate::persistence::BookStore;
use std::io;

/// Commands offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Search,
    ShowAll,
    EditPhone,
    Delete,
    Exit,
}

impl Command {
    /// Map a menu choice ("1".."6") to a command.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::ShowAll),
            "4" => Some(Self::EditPhone),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive session over a loaded address book.
///
/// The book is loaded once when the session opens and saved after every
/// change.
pub struct Session<S, U> {
    book: AddressBook,
    store: S,
    ui: U,
    page_size: usize,
}

impl<S: BookStore, U: UserInterface> Session<S, U> {
    /// Load the book from `store` and prepare the session.
    ///
    /// # Errors
    ///
    /// Propagates any `PersistenceError` from loading. A store with nothing
    /// saved yields an empty book, not an error.
    pub fn open(store: S, ui: U, page_size: usize) -> PersistenceResult<Self> {
        let book = store.load()?;
        Ok(Self {
            book,
            store,
            ui,
            page_size,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Tear the session down, returning its parts.
    pub fn into_parts(self) -> (AddressBook, S, U) {
        (self.book, self.store, self.ui)
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.ui.display_commands()?;
            let Some(choice) = self.ui.get_user_input("Choose an option: ")? else {
                break;
            };

            match Command::parse(&choice) {
                Some(Command::Exit) => break,
                Some(command) => self.execute(command)?,
                None => self
                    .ui
                    .display_message("Invalid choice. Please choose a valid option.")?,
            }
        }
        tracing::info!(records = self.book.len(), "Session finished");
        Ok(())
    }

    /// Run a single command. `Exit` does nothing here.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        tracing::debug!(?command, "Executing command");
        match command {
            Command::Add => self.add_contact(),
            Command::Search => self.search(),
            Command::ShowAll => self.show_all(),
            Command::EditPhone => self.edit_phone(),
            Command::Delete => self.delete_contact(),
            Command::Exit => Ok(()),
        }
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let Some(name) = prompt_until(&mut self.ui, "Enter the contact's name: ", |s| {
            Name::new(s)
        })?
        else {
            return Ok(());
        };
        let Some(phone) = prompt_until(&mut self.ui, "Enter the phone number: ", |s| {
            Phone::new(s)
        })?
        else {
            return Ok(());
        };
        let Some(birthday) = prompt_until(
            &mut self.ui,
            "Enter the date of birth (YYYY-MM-DD, blank to skip): ",
            optional_birthday,
        )?
        else {
            return Ok(());
        };

        self.book
            .add_record(Record::from_parts(name, vec![phone], birthday));
        self.persist()?;
        self.ui.display_message("Contact added!")
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(query) = self
            .ui
            .get_user_input("Enter a name or phone number to search for: ")?
        else {
            return Ok(());
        };
        let query = query.trim();

        let matches = self.book.find_any(query);
        if matches.is_empty() {
            return self.ui.display_message("Contact not found");
        }
        self.ui
            .display_message(&format!("Contacts found for your query '{}':", query))?;
        self.ui.display_contacts(&matches)
    }

    fn show_all(&mut self) -> io::Result<()> {
        if self.book.is_empty() {
            return self.ui.display_message("The address book is empty.");
        }

        let mut pages = match self.book.paginate(self.page_size) {
            Ok(pages) => pages.peekable(),
            Err(e) => return self.ui.display_message(&e.to_string()),
        };

        self.ui.display_message("Contacts:")?;
        while let Some(page) = pages.next() {
            let contacts: Vec<&Record> = page.iter().collect();
            self.ui.display_contacts(&contacts)?;

            if pages.peek().is_none() {
                break;
            }
            match self
                .ui
                .get_user_input("Press Enter to see more, or q to stop: ")?
            {
                Some(answer) if !answer.trim().eq_ignore_ascii_case("q") => {}
                _ => break,
            }
        }
        Ok(())
    }

    fn edit_phone(&mut self) -> io::Result<()> {
        let Some(name) = self.ui.get_user_input("Enter the contact's name: ")? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if self.book.find_exact(&name).is_none() {
            return self.ui.display_message("Contact not found");
        }

        let Some(old) = self.ui.get_user_input("Enter the phone number to change: ")? else {
            return Ok(());
        };
        let Some(new) = prompt_until(&mut self.ui, "Enter the new phone number: ", |s| {
            Phone::new(s)
        })?
        else {
            return Ok(());
        };

        let result = match self.book.find_exact_mut(&name) {
            Some(record) => record.edit_phone(old.trim(), new.into_inner()),
            None => return self.ui.display_message("Contact not found"),
        };

        match result {
            Ok(()) => {
                self.persist()?;
                self.ui.display_message("Phone number updated!")
            }
            Err(e) => {
                tracing::warn!(contact = %name, error = %e, "Phone edit rejected");
                self.ui.display_message(&e.to_string())
            }
        }
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.ui.get_user_input("Enter the name of the contact to delete: ")?
        else {
            return Ok(());
        };

        match self.book.delete(name.trim()) {
            Some(_) => {
                self.persist()?;
                self.ui.display_message("Contact deleted!")
            }
            None => self.ui.display_message("Contact not found"),
        }
    }

    /// Save the book, reporting failures to the user instead of aborting.
    fn persist(&mut self) -> io::Result<()> {
        if let Err(e) = self.store.save(&self.book) {
            tracing::error!(error = %e, "Failed to save address book");
            self.ui
                .display_message(&format!("Failed to save address book: {}", e))?;
        }
        Ok(())
    }
}

/// Keep asking until `parse` accepts the (trimmed) answer.
///
/// Returns `None` when input runs out first.
fn prompt_until<U, T, F>(ui: &mut U, prompt: &str, parse: F) -> io::Result<Option<T>>
where
    U: UserInterface,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    while let Some(answer) = ui.get_user_input(prompt)? {
        match parse(answer.trim()) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected input");
                ui.display_message(&e.to_string())?;
            }
        }
    }
    Ok(None)
}

fn optional_birthday(raw: &str) -> Result<Option<Birthday>, ValidationError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        Birthday::new(raw).map(Some)
    }
}
