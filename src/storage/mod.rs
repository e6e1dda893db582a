//! Persistence adapter for the address book.
//!
//! The whole book is snapshotted to a single JSON file. Writes go through a
//! sibling temp file followed by a rename, so a crash mid-write never
//! leaves a half-written snapshot behind.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Load the address book from `path`.
///
/// A missing file is the normal first-run case and yields an empty book.
/// Any other failure (unreadable file, corrupt JSON) is surfaced: silently
/// discarding data that exists on disk would be data loss.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no snapshot found, starting with an empty book");
            return Ok(AddressBook::new());
        }
        Err(err) => return Err(err.into()),
    };

    let book: AddressBook = serde_json::from_str(&contents)?;
    info!(path = %path.display(), records = book.len(), "loaded address book");
    Ok(book)
}

/// Save the address book to `path`, atomically.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!(path = %path.display(), records = book.len(), "saved address book");
    Ok(())
}
