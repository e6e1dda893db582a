//! Command parsing and dispatch.
//!
//! Each user-visible command maps to one handler. Handlers return
//! `CommandResult<String>`; the dispatcher is the single place where errors
//! become user-facing text, so nothing below this layer ever prints.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use crate::services::upcoming_birthdays;
use chrono::NaiveDate;
use tracing::debug;

/// What the read-loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and keep reading.
    Reply(String),
    /// Print the farewell, persist, and stop.
    Exit,
}

/// Split an input line into a lowercased command word and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// Route one input line to its handler and convert any handler error into
/// its fixed user-facing string.
pub fn dispatch(
    line: &str,
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u64,
) -> Option<Outcome> {
    let (command, args) = parse_input(line)?;
    debug!(command = %command, args = args.len(), "dispatching");

    let reply = match command.as_str() {
        "exit" | "close" => return Some(Outcome::Exit),
        "hello" => Ok("How can I help you?".to_string()),
        "add" => add_contact(&args, book),
        "change" => change_contact(&args, book),
        "phone" => show_phone(&args, book),
        "all" => Ok(show_all(book)),
        "add-birthday" => add_birthday(&args, book),
        "show-birthday" => show_birthday(&args, book),
        "birthdays" => Ok(birthdays(book, today, window_days)),
        _ => Ok("Invalid command.".to_string()),
    };

    Some(Outcome::Reply(
        reply.unwrap_or_else(|err| err.to_string()),
    ))
}

/// `add NAME PHONE [BIRTHDAY]`: create the contact, or overwrite the phone
/// (and optionally the birthday) of an existing one.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return Err(CommandError::Arity),
    };
    let birthday = args.get(2);

    match book.find(name) {
        Some(existing) => {
            let mut record = existing.clone();
            record.replace_phone(phone)?;
            if let Some(raw) = birthday {
                record.set_birthday(raw)?;
            }
            book.upsert(record);
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            if let Some(raw) = birthday {
                record.set_birthday(raw)?;
            }
            book.upsert(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change NAME PHONE`: replace the contact's phone list with one number.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone] => (*name, *phone),
        _ => return Err(CommandError::Arity),
    };

    let mut record = book.find(name).cloned().ok_or(CommandError::NotFound)?;
    record.replace_phone(phone)?;
    book.upsert(record);
    Ok("Phone changed.".to_string())
}

/// `phone NAME`: show the contact's description line.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::Arity)?;
    book.find(name)
        .map(Record::to_string)
        .ok_or(CommandError::NotFound)
}

/// `all`: every record on its own line, in book order.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday NAME DD.MM.YYYY`: set or overwrite the contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, raw) = match args {
        [name, raw] => (*name, *raw),
        _ => return Err(CommandError::Arity),
    };

    let mut record = book.find(name).cloned().ok_or(CommandError::NotFound)?;
    record.set_birthday(raw)?;
    book.upsert(record);
    Ok("Birthday added.".to_string())
}

/// `show-birthday NAME`: show the stored birthday.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::Arity)?;
    book.find(name)
        .and_then(Record::birthday)
        .map(|birthday| format!("{}'s birthday is {}", name, birthday))
        .ok_or(CommandError::BirthdayNotFound)
}

/// `birthdays`: contacts celebrating within the window, one per line.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u64) -> String {
    let hits = upcoming_birthdays(book, today, window_days);
    if hits.is_empty() {
        return format!("No birthdays in the next {} days.", window_days);
    }
    hits.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lowercases_command() {
        let (command, args) = parse_input("  ADD Jane 0501234567 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, ["Jane", "0501234567"]);
    }

    #[test]
    fn test_parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn test_dispatch_exit_and_close() {
        let mut book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(dispatch("exit", &mut book, today, 7), Some(Outcome::Exit));
        assert_eq!(dispatch("close", &mut book, today, 7), Some(Outcome::Exit));
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            dispatch("frobnicate", &mut book, today, 7),
            Some(Outcome::Reply("Invalid command.".to_string()))
        );
    }

    #[test]
    fn test_dispatch_converts_errors_to_fixed_text() {
        let mut book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            dispatch("change Ghost 0501234567", &mut book, today, 7),
            Some(Outcome::Reply("Contact not found.".to_string()))
        );
        assert_eq!(
            dispatch("add Jane", &mut book, today, 7),
            Some(Outcome::Reply(
                "Insufficient input. Please check your command.".to_string()
            ))
        );
        assert_eq!(
            dispatch("add Jane 123", &mut book, today, 7),
            Some(Outcome::Reply(
                "Invalid data. Please check your input.".to_string()
            ))
        );
    }
}
