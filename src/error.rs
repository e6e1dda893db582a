//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can produce.
///
/// Every variant displays as the exact fixed string shown to the user, so
/// the dispatch boundary converts any of these with `to_string()` and
/// nothing propagates further.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The named contact is not in the book
    #[error("Contact not found.")]
    NotFound,

    /// The contact exists but has no birthday (or is absent entirely)
    #[error("Birthday not found.")]
    BirthdayNotFound,

    /// A phone number or date failed validation
    #[error("Invalid data. Please check your input.")]
    Invalid(#[from] ValidationError),

    /// The command was given too few arguments
    #[error("Insufficient input. Please check your command.")]
    Arity,
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but does not parse
    #[error("corrupt address book snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
