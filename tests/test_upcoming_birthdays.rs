//! Integration tests for the upcoming-birthday query.
//!
//! The unit tests next to `services::upcoming` cover each rule in
//! isolation; these run the query over a mixed book the way the
//! `birthdays` command does.

use chrono::NaiveDate;
use contact_assistant::{upcoming_birthdays, AddressBook, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn contact(name: &str, birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    record.add_phone("0501234567").unwrap();
    if let Some(raw) = birthday {
        record.set_birthday(raw).unwrap();
    }
    record
}

/// One pass over a book mixing every case: an in-window weekday hit, a
/// weekend occurrence that shifts into the window, an out-of-window
/// birthday, an already-passed one, and a record with no birthday at all.
#[test]
fn test_mixed_book_one_week_window() {
    let mut book = AddressBook::new();
    book.upsert(contact("Midweek", Some("05.06.1990"))); // Wed 2024-06-05
    book.upsert(contact("Weekend", Some("08.06.1992"))); // Sat -> Mon 2024-06-10
    book.upsert(contact("TooFar", Some("20.06.1991"))); // 19 days out
    book.upsert(contact("Passed", Some("01.01.1980"))); // rolls to 2025
    book.upsert(contact("NoBirthday", None));

    // 2024-06-03 is a Monday; the window runs through 2024-06-10.
    let hits = upcoming_birthdays(&book, date(2024, 6, 3), 7);

    let rendered: Vec<String> = hits.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["Midweek: 2024-06-05", "Weekend: 2024-06-10"]);
}

#[test]
fn test_window_boundaries_are_inclusive() {
    let mut book = AddressBook::new();
    book.upsert(contact("OnToday", Some("03.06.1990")));
    book.upsert(contact("OnHorizon", Some("07.06.1990"))); // Fri, exactly +4
    book.upsert(contact("PastHorizon", Some("12.06.1990")));

    // Narrow window: Monday through Friday of the same week.
    let hits = upcoming_birthdays(&book, date(2024, 6, 3), 4);
    let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["OnToday", "OnHorizon"]);
}

#[test]
fn test_wider_window_follows_configuration() {
    let mut book = AddressBook::new();
    book.upsert(contact("TwoWeeksOut", Some("14.06.1990"))); // Fri 2024-06-14

    assert!(upcoming_birthdays(&book, date(2024, 6, 3), 7).is_empty());
    let hits = upcoming_birthdays(&book, date(2024, 6, 3), 14);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].date, date(2024, 6, 14));
}

#[test]
fn test_empty_book_yields_empty_vec() {
    let book = AddressBook::new();
    assert!(upcoming_birthdays(&book, date(2024, 6, 3), 7).is_empty());
}

#[test]
fn test_feb_29_policy_over_year_boundary_cases() {
    let mut book = AddressBook::new();
    book.upsert(contact("Leap", Some("29.02.2000")));

    // Leap year: the true date is used (2024-02-29, a Thursday).
    let hits = upcoming_birthdays(&book, date(2024, 2, 26), 7);
    assert_eq!(hits[0].date, date(2024, 2, 29));

    // Non-leap year: resolved to Feb 28 (2025-02-28, a Friday).
    let hits = upcoming_birthdays(&book, date(2025, 2, 24), 7);
    assert_eq!(hits[0].date, date(2025, 2, 28));
}
