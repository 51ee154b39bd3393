//! Directory entry parser.
//!
//! Splits the raw text block of one entry into header lines and trailing
//! feast-date mentions.

use crate::error::Result;
use crate::models::{Saint, SaintDay};
use crate::parse::dates;

/// Parse the raw text block of one directory entry.
///
/// Lines are scanned in order: the first line carrying a date mention opens
/// the date region, and every match on or after it joins the feast-date
/// list. Lines before that are header lines; header capture stops for good
/// once dates begin, even when a later line carries no date.
///
/// Entries with fewer than two header lines are malformed and dropped with
/// a diagnostic; the surrounding crawl continues.
pub fn parse_saint(block: &str) -> Option<Saint> {
    let mut day_fragments: Vec<&str> = Vec::new();
    let mut headers: Vec<&str> = Vec::new();

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let matches = dates::find_days(line);
        if !matches.is_empty() {
            day_fragments.extend(matches);
        } else if day_fragments.is_empty() {
            headers.push(line);
        }
    }

    if headers.len() < 2 {
        log::warn!(
            "dropping malformed entry with {} header line(s): {:?}",
            headers.len(),
            headers
        );
        return None;
    }

    let dates: Result<Vec<SaintDay>> = day_fragments.into_iter().map(dates::parse_day).collect();
    let dates = match dates {
        Ok(dates) => dates,
        Err(e) => {
            log::warn!("dropping entry {:?}: {e}", headers[0]);
            return None;
        }
    };

    Some(Saint {
        full_name: headers.join(" "),
        first_name: headers[1].to_string(),
        role: headers.get(2).map(|r| r.to_string()),
        dates,
    })
}
