//! Persistence gateway for the address book.
//!
//! The whole book is saved and loaded as one snapshot. [`BookStore`] is the
//! seam the interactive session talks to; [`JsonFileStore`] is the on-disk
//! implementation.

pub mod document;
pub mod json_file;

pub use document::{BookDocument, FORMAT_VERSION};
pub use json_file::JsonFileStore;

use crate::error::PersistenceResult;
use crate::models::AddressBook;

/// Storage for complete address book snapshots.
///
/// Implementations must treat "nothing saved yet" as an empty book, and
/// report unreadable stored data as an error rather than an empty book.
pub trait BookStore {
    /// Load the last saved snapshot, or an empty book if none exists.
    fn load(&self) -> PersistenceResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> PersistenceResult<()>;
}
