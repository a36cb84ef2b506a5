//! The `ContactStore` trait and the in-memory reference backend.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-csv`).
//! The book depends on this abstraction, not on any concrete backend.

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use crate::contact::Contact;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Roster storage backend.
///
/// A backend holds one full snapshot of the record set. There is no
/// incremental write path: every mutation in the book is followed by a
/// [`save`](ContactStore::save) of the whole set, so `load` after `save`
/// always reproduces the in-memory contacts, order included.
pub trait ContactStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the full record set from the backing medium.
  ///
  /// A backing medium that holds nothing yet (e.g. a file that does not
  /// exist) is the empty set, not an error.
  fn load(&self) -> Result<Vec<Contact>, Self::Error>;

  /// Overwrite the backing medium with `contacts`, in order.
  fn save(&self, contacts: &[Contact]) -> Result<(), Self::Error>;
}

// ─── In-memory backend ───────────────────────────────────────────────────────

/// A backend that stores contacts in process memory.
///
/// Used by the book's own tests and by callers wanting a throwaway book.
/// Cloning is cheap; clones share the same records, so a test can hold one
/// handle while the book owns another. Single-threaded by design, like
/// everything in this system.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  records: Rc<RefCell<Vec<Contact>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// A store pre-seeded with `contacts`, as if a previous run saved them.
  pub fn with_contacts(contacts: Vec<Contact>) -> Self {
    Self { records: Rc::new(RefCell::new(contacts)) }
  }
}

impl ContactStore for MemoryStore {
  type Error = Infallible;

  fn load(&self) -> Result<Vec<Contact>, Self::Error> {
    Ok(self.records.borrow().clone())
  }

  fn save(&self, contacts: &[Contact]) -> Result<(), Self::Error> {
    *self.records.borrow_mut() = contacts.to_vec();
    Ok(())
  }
}
