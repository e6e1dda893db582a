//! Business logic over the address book.

pub mod upcoming;

pub use upcoming::{upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
