//! The address book: a name-keyed, insertion-ordered store of records.

use super::Record;
use serde::{Deserialize, Serialize};

/// The session's collection of contact records, keyed by name.
///
/// Backed by a `Vec` so that iteration order is insertion order, which is
/// what the listing and birthday commands present to the user. Upserting an
/// existing name replaces the record in place without moving it; books are
/// small enough that the linear name scan is not worth trading for a map.
///
/// Records are owned exclusively by the book. Callers that want to edit one
/// clone it out via [`find`](Self::find), mutate the clone, and write it back
/// with [`upsert`](Self::upsert).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, or overwrite the existing record with the same name.
    ///
    /// An overwritten name keeps its original position in iteration order;
    /// a new name goes to the end.
    pub fn upsert(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
