// src/pipeline/calendar.rs

//! Feast-day calendar index.
//!
//! Inverts per-saint date lists into a mapping from calendar day to the
//! saints celebrated on that day, persisted as `calendar.json`.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{Config, Saint};
use crate::services::{PageSource, SaintCrawler};
use crate::storage::CacheStore;

/// Mapping from "month-day" key to the saints celebrated on that day.
///
/// Index keys are unpadded ("3-5"), matching the artifact format the
/// published calendar has always used; the on-disk cache paths under
/// `calendar/` zero-pad instead.
pub type CalendarIndex = BTreeMap<String, Vec<Saint>>;

/// Build the calendar index from the full record set.
///
/// A saint appears once per feast date it carries, in input order within
/// each bucket; a saint without dates appears nowhere.
pub fn build_calendar(saints: &[Saint]) -> CalendarIndex {
    let mut index = CalendarIndex::new();
    for saint in saints {
        for date in &saint.dates {
            let key = format!("{}-{}", date.month, date.day);
            index.entry(key).or_default().push(saint.clone());
        }
    }
    index
}

/// Build and persist the calendar index from all name partitions.
///
/// Records come through the cache, so a fully cached directory makes this a
/// pure local operation.
pub async fn run_index<S: PageSource>(
    config: &Config,
    store: &CacheStore,
    crawler: &SaintCrawler<S>,
) -> Result<CalendarIndex> {
    let saints = crate::pipeline::run_names(config, store, crawler).await?;
    let index = build_calendar(&saints);
    store.save_calendar(&index).await?;
    log::info!(
        "calendar index: {} days from {} entries",
        index.len(),
        saints.len()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SaintDay;

    fn saint(name: &str, dates: &[(u32, u32)]) -> Saint {
        Saint {
            full_name: name.to_string(),
            first_name: name.to_string(),
            role: None,
            dates: dates
                .iter()
                .map(|&(month, day)| SaintDay { month, day })
                .collect(),
        }
    }

    #[test]
    fn multi_date_saint_appears_in_each_bucket() {
        let saints = vec![
            saint("giovanni", &[(6, 24), (8, 29)]),
            saint("anonimo", &[]),
        ];

        let index = build_calendar(&saints);

        assert_eq!(index.len(), 2);
        assert_eq!(index["6-24"].len(), 1);
        assert_eq!(index["8-29"].len(), 1);
        assert_eq!(index["6-24"][0].full_name, "giovanni");
        // The dateless saint lands in no bucket.
        assert!(index.values().all(|b| b.iter().all(|s| s.full_name != "anonimo")));
    }

    #[test]
    fn keys_are_unpadded() {
        let index = build_calendar(&[saint("x", &[(3, 5)])]);
        assert!(index.contains_key("3-5"));
        assert!(!index.contains_key("03-05"));
    }

    #[test]
    fn bucket_order_follows_input_order() {
        let saints = vec![
            saint("primo", &[(1, 17)]),
            saint("secondo", &[(1, 17)]),
            saint("terzo", &[(1, 17)]),
        ];

        let index = build_calendar(&saints);
        let names: Vec<&str> = index["1-17"].iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["primo", "secondo", "terzo"]);
    }

    #[test]
    fn build_is_deterministic() {
        let saints = vec![
            saint("a", &[(2, 14), (12, 2)]),
            saint("b", &[(2, 14)]),
            saint("c", &[(7, 1)]),
        ];

        let first = serde_json::to_string(&build_calendar(&saints)).unwrap();
        let second = serde_json::to_string(&build_calendar(&saints)).unwrap();
        assert_eq!(first, second);
    }
}
