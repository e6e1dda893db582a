//! Birthday proximity query.
//!
//! Finds contacts whose next birthday occurrence lands within the
//! notification window, shifting weekend occurrences to the following
//! Monday.

use crate::domain::Birthday;
use crate::models::AddressBook;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// Default notification window, in days.
pub const DEFAULT_WINDOW_DAYS: u64 = 7;

/// One upcoming-birthday hit: the contact and the date it will be
/// celebrated on (after any weekend shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format("%Y-%m-%d"))
    }
}

/// Compute which contacts have a birthday within the next `window_days`
/// days of `today`, both bounds inclusive.
///
/// Per record with a birthday:
/// 1. Take this year's occurrence of the birthday; if it is strictly
///    before `today`, take next year's instead.
/// 2. Shift a Saturday/Sunday occurrence forward to the following Monday.
/// 3. Keep the record if the shifted date falls inside the window. The
///    shifted date is also the one reported.
///
/// Results preserve book iteration order. An empty `Vec` means no hits;
/// the presentation layer decides what to print for that.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u64,
) -> Vec<UpcomingBirthday> {
    let horizon = today + Duration::days(window_days as i64);

    book.iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let mut occurrence = occurrence_in_year(birthday, today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birthday, today.year() + 1);
            }
            let celebrated = shift_off_weekend(occurrence);
            (today <= celebrated && celebrated <= horizon).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                date: celebrated,
            })
        })
        .collect()
}

/// The birthday's occurrence in `year`.
///
/// A Feb 29 birthday resolves to Feb 28 in non-leap years, keeping the
/// occurrence in the same month and never past the true anniversary.
fn occurrence_in_year(birthday: &Birthday, year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        Some(date) => date,
        // Only Feb 29 can fail to exist in a given year.
        None => NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or_default(),
    }
}

/// Move a Saturday/Sunday date forward to the following Monday; weekdays
/// pass through unchanged.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let days_from_monday = i64::from(date.weekday().num_days_from_monday());
    if days_from_monday >= 5 {
        date + Duration::days(7 - days_from_monday)
    } else {
        date
    }
}
