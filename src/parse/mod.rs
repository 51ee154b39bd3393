//! Text parsers for directory entries.
//!
//! - `dates`: the feast-date sub-parser over Italian month names
//! - `saint`: raw entry block to `Saint` record

pub mod dates;
pub mod saint;
