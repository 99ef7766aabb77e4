//! JSON file implementation of [`BookStore`].

use super::document::{BookDocument, FORMAT_VERSION};
use super::BookStore;
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::AddressBook;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Saves the address book as a JSON document at a fixed path.
///
/// Saving writes a sibling `*.tmp` file and renames it over the target, so
/// readers see either the old snapshot or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_document(&self, target: &Path, document: &BookDocument) -> PersistenceResult<()> {
        let file = File::create(target).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document).map_err(PersistenceError::Encode)?;
        writer.flush().map_err(|e| self.io_error(e))?;
        writer
            .into_inner()
            .map_err(|e| self.io_error(e.into_error()))?
            .sync_all()
            .map_err(|e| self.io_error(e))
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> PersistenceResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "No saved address book, starting empty"
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let document: BookDocument = serde_json::from_reader(BufReader::new(file)).map_err(
            |source| PersistenceError::Corrupt {
                path: self.path.clone(),
                source,
            },
        )?;

        if document.version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                path: self.path.clone(),
                version: document.version,
            });
        }

        let book = document.into_book();
        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        let document = BookDocument::from_book(book);
        let temp = self.temp_path();

        if let Err(e) = self.write_document(&temp, &document) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(e));
        }

        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
