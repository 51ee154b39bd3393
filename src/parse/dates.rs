//! Feast-date sub-parser.
//!
//! The directory writes feast dates as "<day> <month name>" with lowercase
//! Italian month names. The month number is the name's 1-based position in
//! the fixed list; the day is taken verbatim with no calendar-validity check.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::SaintDay;

/// Italian month names, in calendar order.
pub const MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Matches "<1-2 digit day> <month name>".
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\d{{1,2}} (?:{})", MONTHS.join("|"));
    Regex::new(&pattern).expect("date pattern is valid")
});

/// Find every feast-date mention in `text`, left to right, non-overlapping.
pub fn find_days(text: &str) -> Vec<&str> {
    DATE_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Parse one "<day> <month name>" fragment into a [`SaintDay`].
///
/// Fails on an unknown month name; fragments produced by [`find_days`]
/// always parse.
pub fn parse_day(fragment: &str) -> Result<SaintDay> {
    let (day, month_name) = fragment
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::parse(format!("not a day-month fragment: {fragment:?}")))?;

    let month = MONTHS
        .iter()
        .position(|m| *m == month_name)
        .ok_or_else(|| AppError::parse(format!("unknown month name: {month_name:?}")))?;

    let day = day
        .parse()
        .map_err(|e| AppError::parse(format!("bad day number in {fragment:?}: {e}")))?;

    Ok(SaintDay {
        month: month as u32 + 1,
        day,
    })
}
