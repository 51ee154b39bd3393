//! Pipeline entry points for crawler operations.
//!
//! - `run_names`: crawl every name-index partition through the cache
//! - `run_calendar`: crawl every calendar partition through the cache
//! - `run_index`: build the feast-day calendar index from cached records
//! - `run_validate`: check the effective configuration

pub mod calendar;
pub mod crawl;
pub mod validate;

pub use calendar::{CalendarIndex, build_calendar, run_index};
pub use crawl::{RunStats, run_calendar, run_names};
pub use validate::run_validate;
