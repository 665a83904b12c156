//! Fixed-locale date formatting.
//!
//! The board renders ticket dates as `"<day> <month> <year>, <weekday>"`
//! ("1 Май 2023, Пн") using fixed Russian abbreviation tables. Formatting
//! is pure and deterministic given a resolved calendar date; parsing the
//! incoming ISO strings happens once, at the source boundary.

use chrono::{Datelike, NaiveDate};

/// Error returned when parsing an invalid ISO date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct DateError {
    reason: &'static str,
}

/// Month abbreviations, January first.
const MONTHS: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

/// Weekday abbreviations, Sunday first.
const WEEKDAYS: [&str; 7] = ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"];

/// Parse an ISO date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a `T` or space and a time
/// component. The date portion is taken exactly as written: the input is
/// treated as a plain civil calendar date and any time or offset suffix is
/// ignored, with no timezone conversion. For date-only inputs this is
/// equivalent to interpreting them as midnight UTC, which fixes the
/// weekday unambiguously.
///
/// The suffix itself is deliberately not validated beyond its leading
/// separator; only the civil date is read, so a malformed time component
/// cannot reject an otherwise usable record.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ticket_server::datefmt::parse_iso;
///
/// let date = parse_iso("2023-05-01").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
///
/// // A time suffix contributes nothing
/// assert_eq!(parse_iso("2023-05-01T23:59:00Z").unwrap(), date);
///
/// assert!(parse_iso("01.05.2023").is_err());
/// assert!(parse_iso("2023-13-01").is_err());
/// ```
pub fn parse_iso(s: &str) -> Result<NaiveDate, DateError> {
    let Some((date_part, rest)) = s.split_at_checked(10) else {
        return Err(DateError {
            reason: "expected YYYY-MM-DD",
        });
    };

    if !rest.is_empty() && !rest.starts_with('T') && !rest.starts_with(' ') {
        return Err(DateError {
            reason: "expected T or space after the date",
        });
    }

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| DateError {
        reason: "expected YYYY-MM-DD",
    })
}

/// Format a calendar date for display.
///
/// The day of month carries no leading zero; month and weekday come from
/// the fixed locale tables.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ticket_server::datefmt::format;
///
/// let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
/// assert_eq!(format(date), "1 Май 2023, Пн");
/// ```
pub fn format(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!("{} {} {}, {}", date.day(), month, date.year(), weekday)
}

/// Parse and format in one step.
pub fn format_iso(s: &str) -> Result<String, DateError> {
    Ok(format(parse_iso(s)?))
}
