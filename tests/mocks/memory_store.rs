use address_book::error::{PersistenceError, PersistenceResult};
use address_book::{AddressBook, BookStore};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// In-memory book store for testing.
///
/// Keeps the last saved snapshot and counts saves. Clones share state, so a
/// test can keep a handle after moving the store into a session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MemoryBookStore {
    saved: Rc<RefCell<Option<AddressBook>>>,
    save_count: Rc<RefCell<usize>>,
    fail_saves: Rc<RefCell<bool>>,
}

#[allow(dead_code)]
impl MemoryBookStore {
    /// Create a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.saved.borrow_mut() = Some(book);
        store
    }

    /// The last saved snapshot, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.borrow_mut() = true;
    }
}

impl BookStore for MemoryBookStore {
    fn load(&self) -> PersistenceResult<AddressBook> {
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        if *self.fail_saves.borrow() {
            return Err(PersistenceError::Io {
                path: PathBuf::from("memory"),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        *self.saved.borrow_mut() = Some(book.clone());
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }
}
