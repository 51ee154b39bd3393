//! Write-once cache storage for crawl results.
//!
//! ## Directory Structure
//!
//! ```text
//! db/
//! ├── config.toml           # Crawler configuration (optional)
//! ├── calendar.json         # Derived feast-day index (rewritten each build)
//! ├── stats.json            # Last run statistics (rewritten each run)
//! ├── names/                # Write-once name-index partitions
//! │   ├── A.json
//! │   └── Z.json
//! └── calendar/             # Write-once calendar partitions
//!     └── 03/
//!         └── 05.json
//! ```
//!
//! Partition files are never overwritten: a cached partition makes the
//! corresponding crawl a pure local read on every later run.

pub mod local;

// Re-export for convenience
pub use local::CacheStore;
