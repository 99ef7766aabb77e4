//! AddressBook: the name-keyed collection of records.

use super::record::Record;
use crate::error::{BookError, BookResult};
use std::slice::{Chunks, Iter};

/// Contacts keyed by name, kept in insertion order.
///
/// At most one record exists per name; adding a record under an existing
/// name replaces the old one in its original position. Lookups are linear
/// scans over the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records in order, applying the same last-wins rule
    /// as [`AddressBook::add_record`].
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(contact = %record.name(), "Replacing existing record");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(contact = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Case-insensitive substring search over names and phone numbers.
    ///
    /// A record is listed once for its name and once for every matching
    /// phone, so it can appear several times in the result.
    pub fn find_any(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        let mut matches = Vec::new();

        for record in &self.records {
            if record.name().as_str().to_lowercase().contains(&needle) {
                matches.push(record);
            }
            for phone in record.phones() {
                if phone.as_str().contains(&needle) {
                    matches.push(record);
                }
            }
        }

        tracing::debug!(query = %query, matches = matches.len(), "Searched address book");
        matches
    }

    /// Record stored under exactly `name`.
    pub fn find_exact(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable access to the record stored under exactly `name`.
    pub fn find_exact_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under exactly `name`. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position_of(name)?;
        tracing::debug!(contact = %name, "Deleting record");
        Some(self.records.remove(index))
    }

    /// Batches of up to `batch_size` records in insertion order.
    ///
    /// Each call starts a fresh pass over the current contents.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidBatchSize` when `batch_size` is 0.
    pub fn paginate(&self, batch_size: usize) -> BookResult<Pages<'_>> {
        if batch_size == 0 {
            return Err(BookError::InvalidBatchSize(batch_size));
        }
        Ok(Pages {
            chunks: self.records.chunks(batch_size),
        })
    }

    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over batches of records produced by [`AddressBook::paginate`].
///
/// Every batch holds `batch_size` records except possibly the last one.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
