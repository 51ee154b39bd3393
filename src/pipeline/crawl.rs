// src/pipeline/crawl.rs

//! Crawl drivers over the full partition key spaces.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Config, Partition, Saint};
use crate::services::{PageSource, SaintCrawler};
use crate::storage::CacheStore;

/// Summary of one driver run, persisted as `stats.json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub partition_count: usize,
    pub saint_count: usize,
}

/// Crawl all name-index partitions, A through Z, each memoized by the cache.
///
/// Partitions run concurrently up to `crawler.max_concurrent`; distinct
/// partitions write distinct cache files, so parallel runs never contend.
/// Results come back concatenated in letter order.
pub async fn run_names<S: PageSource>(
    config: &Config,
    store: &CacheStore,
    crawler: &SaintCrawler<S>,
) -> Result<Vec<Saint>> {
    let start_time = Utc::now();
    let letters: Vec<char> = ('A'..='Z').collect();
    let partition_count = letters.len();
    let concurrency = config.crawler.max_concurrent.max(1);

    let mut jobs = stream::iter(letters)
        .map(|letter| async move {
            let partition = Partition::name_index(letter)?;
            let saints = store
                .get_or_compute(&partition, || crawler.crawl_letter(letter))
                .await?;
            log::info!("letter {letter}: {} entries", saints.len());
            Ok::<_, AppError>(saints)
        })
        .buffered(concurrency);

    let mut results = Vec::new();
    while let Some(batch) = jobs.next().await {
        results.extend(batch?);
    }

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        partition_count,
        saint_count: results.len(),
    };
    store.save_stats(&stats).await?;

    Ok(results)
}

/// Crawl every calendar partition: all (month, day) pairs for months 1-12
/// and days 1-31, impossible dates included (the site answers 404 and the
/// absence is cached).
pub async fn run_calendar<S: PageSource>(
    config: &Config,
    store: &CacheStore,
    crawler: &SaintCrawler<S>,
) -> Result<()> {
    let start_time = Utc::now();
    let days: Vec<(u32, u32)> = (1..=12)
        .flat_map(|month| (1..=31).map(move |day| (month, day)))
        .collect();
    let partition_count = days.len();
    let concurrency = config.crawler.max_concurrent.max(1);

    let mut jobs = stream::iter(days)
        .map(|(month, day)| async move {
            let partition = Partition::calendar(month, day)?;
            let saints = store
                .get_or_compute(&partition, || crawler.crawl_calendar(month, day))
                .await?;
            Ok::<_, AppError>((month, day, saints))
        })
        .buffered(concurrency);

    let mut saint_count = 0;
    while let Some(result) = jobs.next().await {
        let (month, day, saints) = result?;
        match saints {
            Some(saints) => {
                saint_count += saints.len();
                log::info!("{month}/{day}: {} entries", saints.len());
            }
            None => log::debug!("{month}/{day}: no page"),
        }
    }

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        partition_count,
        saint_count,
    };
    store.save_stats(&stats).await?;

    Ok(())
}
