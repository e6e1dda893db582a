//! Contact Assistant - a command-line assistant bot for contacts, phone
//! numbers and birthdays.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone numbers, birthdays)
//! - **models**: contact records and the insertion-ordered address book
//! - **services**: the upcoming-birthday query with its weekend-shift rule
//! - **commands**: command parsing, dispatch, and the fixed reply strings
//! - **storage**: JSON snapshot persistence with atomic writes
//! - **repl**: the interactive stdin/stdout loop
//! - **config**: environment-driven configuration
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod services;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use services::{upcoming_birthdays, UpcomingBirthday};
