//! Versioned on-disk shape of an address book.

use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized form of a whole address book.
///
/// ```json
/// {"version": 1, "records": [{"name": "John", "phones": ["1234567890"], "birthday": "2000-01-01"}]}
/// ```
///
/// Records are stored in the book's insertion order. Unknown or missing
/// top-level keys are rejected so a mistyped file never loads as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookDocument {
    pub version: u32,

    pub records: Vec<Record>,
}

impl BookDocument {
    pub fn from_book(book: &AddressBook) -> Self {
        Self {
            version: FORMAT_VERSION,
            records: book.iter().cloned().collect(),
        }
    }

    pub fn into_book(self) -> AddressBook {
        AddressBook::from_records(self.records)
    }
}
