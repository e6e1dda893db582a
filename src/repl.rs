//! Interactive read-loop.
//!
//! Owns the stdin/stdout transport: prompt, dispatch, reply. The loop ends
//! on an explicit `exit`/`close` or when stdin reaches end-of-file; both
//! paths fall through to the same save in [`run`], so a piped session
//! persists its changes just like an interactive one.

use crate::commands::{dispatch, Outcome};
use crate::config::Config;
use crate::models::AddressBook;
use crate::storage;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the assistant over stdin/stdout until the user leaves, then persist
/// the book to the configured snapshot file.
///
/// # Errors
///
/// Returns an error if the terminal I/O fails or the final save does.
pub fn run(book: &mut AddressBook, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(
        stdin.lock(),
        stdout.lock(),
        book,
        config.window_days,
        || Local::now().date_naive(),
    )?;

    storage::save(book, &config.data_file)?;
    info!("session ended");
    Ok(())
}

/// The prompt/dispatch loop, generic over its streams and clock so tests
/// can drive it with buffers and a fixed date.
fn session(
    mut input: impl BufRead,
    mut output: impl Write,
    book: &mut AddressBook,
    window_days: u64,
    clock: impl Fn() -> NaiveDate,
) -> io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: leave as if the user had typed "close".
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            break;
        }

        match dispatch(&line, book, clock(), window_days) {
            Some(Outcome::Reply(reply)) => writeln!(output, "{}", reply)?,
            Some(Outcome::Exit) => {
                writeln!(output, "Good bye!")?;
                break;
            }
            None => {} // blank line, re-prompt
        }
    }

    Ok(())
}
