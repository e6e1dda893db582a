//! Data structures for contacts: records and the address book.

pub mod book;
pub mod record;

pub use book::AddressBook;
pub use record::Record;
