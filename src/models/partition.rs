//! Partition keys for the result cache.
//!
//! A partition is one independent crawl unit: a letter of the alphabetical
//! name index, or one day of the calendar. The key determines the cache path,
//! so two partitions never share a storage file.

use std::fmt;

use crate::error::{AppError, Result};

/// Cache key derived from the arguments of a crawl operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// One letter of the name index
    NameIndex { letter: char },

    /// One day of the calendar
    Calendar { month: u32, day: u32 },
}

impl Partition {
    /// Key for a name-index partition. The letter must be ASCII uppercase.
    pub fn name_index(letter: char) -> Result<Self> {
        if !letter.is_ascii_uppercase() {
            return Err(AppError::partition(
                letter.to_string(),
                "name-index partitions are keyed by a single ASCII uppercase letter",
            ));
        }
        Ok(Self::NameIndex { letter })
    }

    /// Key for a calendar partition. Requires month 1-12 and day 1-31; both
    /// arguments are mandatory, there is no partial calendar key.
    pub fn calendar(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(AppError::partition(
                format!("{month}/{day}"),
                "calendar partitions require month 1-12 and day 1-31",
            ));
        }
        Ok(Self::Calendar { month, day })
    }

    /// Storage path relative to the cache root.
    ///
    /// Name partitions live under `names/`, calendar partitions under
    /// `calendar/` with zero-padded month directories.
    pub fn cache_path(&self) -> String {
        match self {
            Self::NameIndex { letter } => format!("names/{letter}.json"),
            Self::Calendar { month, day } => format!("calendar/{month:02}/{day:02}.json"),
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameIndex { letter } => write!(f, "letter {letter}"),
            Self::Calendar { month, day } => write!(f, "day {month}/{day}"),
        }
    }
}
