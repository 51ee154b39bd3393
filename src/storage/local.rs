//! Local filesystem cache implementation.

use std::future::Future;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Partition;
use crate::pipeline::{CalendarIndex, RunStats};

/// Filesystem-backed, write-once result cache.
///
/// One JSON document per partition, at the path the partition key maps to.
/// Writes happen only after a successful compute, through a temp file and a
/// rename, so a failed crawl never leaves a partial cache entry. There is no
/// locking: distinct partitions use distinct files and never contend, while
/// concurrent writers to the same partition are undefined behavior.
#[derive(Clone)]
pub struct CacheStore {
    root_dir: PathBuf,
}

impl CacheStore {
    /// Create a new CacheStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Return the cached value for `partition`, or run `compute`, persist
    /// its result, and return it.
    ///
    /// An existing entry is never overwritten, so `compute` runs at most
    /// once per partition for the lifetime of the cache directory. Calendar
    /// partitions cache `Option<Vec<Saint>>`: a file holding `null` is a
    /// cached absent page, distinct from a partition not yet crawled.
    pub async fn get_or_compute<T, F, Fut>(&self, partition: &Partition, compute: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let key = partition.cache_path();

        if let Some(cached) = self.read_json(&key).await? {
            log::debug!("cache hit for {partition}");
            return Ok(cached);
        }

        let value = compute().await?;
        self.write_json(&key, &value).await?;
        log::debug!("cached {partition} at {key}");
        Ok(value)
    }

    /// Write the derived calendar index, replacing any prior build.
    pub async fn save_calendar(&self, index: &CalendarIndex) -> Result<()> {
        self.write_json("calendar.json", index).await
    }

    /// Write run statistics, replacing the previous run's.
    pub async fn save_stats(&self, stats: &RunStats) -> Result<()> {
        self.write_json("stats.json", stats).await
    }
}
