// src/services/crawler.rs

//! Crawl loops for the two partition kinds.

use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::models::{Config, Saint};
use crate::services::PageSource;
use crate::utils::url::{calendar_url, name_index_url};

/// Drives pagination for name-index partitions and single fetches for
/// calendar partitions.
pub struct SaintCrawler<S> {
    base_url: Url,
    request_delay: Duration,
    max_pages: u32,
    source: S,
}

impl<S: PageSource> SaintCrawler<S> {
    /// Create a crawler over the given page source.
    pub fn new(config: &Config, source: S) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(&config.site.base_url)?,
            request_delay: Duration::from_millis(config.crawler.request_delay_ms),
            max_pages: config.crawler.max_pages,
            source,
        })
    }

    /// Crawl one letter of the name index, page by page.
    ///
    /// Stops at the first absent or empty page; that page contributes
    /// nothing to the result. `max_pages` bounds the loop so a partition can
    /// never paginate forever.
    pub async fn crawl_letter(&self, letter: char) -> Result<Vec<Saint>> {
        let mut results = Vec::new();
        let mut page = 1u32;

        loop {
            if page > self.max_pages {
                log::warn!(
                    "letter {letter}: reached page bound {} before an empty page",
                    self.max_pages
                );
                break;
            }

            let url = name_index_url(&self.base_url, letter, page)?;
            match self.source.fetch(&url).await? {
                None => break,
                Some(saints) if saints.is_empty() => break,
                Some(saints) => {
                    log::debug!("letter {letter}: page {page} yielded {} entries", saints.len());
                    results.extend(saints);
                }
            }

            page += 1;
            if !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
        }

        Ok(results)
    }

    /// Fetch the single page for one calendar day.
    ///
    /// `None` means the site has no entry list for that day (including
    /// impossible dates like 31/02, which the full calendar sweep visits).
    pub async fn crawl_calendar(&self, month: u32, day: u32) -> Result<Option<Vec<Saint>>> {
        let url = calendar_url(&self.base_url, month, day)?;
        self.source.fetch(&url).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct FakeSource {
        pages: Mutex<Vec<Option<Vec<Saint>>>>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(pages: Vec<Option<Vec<Saint>>>) -> Self {
            Self {
                pages: Mutex::new(pages),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageSource for FakeSource {
        async fn fetch(&self, _url: &Url) -> Result<Option<Vec<Saint>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                Ok(None)
            } else {
                Ok(pages.remove(0))
            }
        }
    }

    fn saint(name: &str) -> Saint {
        Saint {
            full_name: name.to_string(),
            first_name: name.to_string(),
            role: None,
            dates: Vec::new(),
        }
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.crawler.request_delay_ms = 0;
        config
    }

    #[tokio::test]
    async fn pagination_concatenates_until_first_absent_page() {
        let pages = vec![
            Some(vec![saint("a")]),
            Some(vec![saint("b"), saint("c")]),
            Some(vec![saint("d")]),
            None,
        ];
        let crawler = SaintCrawler::new(&test_config(), FakeSource::new(pages)).unwrap();

        let saints = crawler.crawl_letter('A').await.unwrap();

        let names: Vec<&str> = saints.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert_eq!(crawler.source.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn pagination_stops_at_empty_page() {
        let pages = vec![Some(vec![saint("a")]), Some(Vec::new()), Some(vec![saint("x")])];
        let crawler = SaintCrawler::new(&test_config(), FakeSource::new(pages)).unwrap();

        let saints = crawler.crawl_letter('B').await.unwrap();

        assert_eq!(saints.len(), 1);
        assert_eq!(crawler.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn pagination_respects_page_bound() {
        let mut config = test_config();
        config.crawler.max_pages = 2;
        let pages = vec![Some(vec![saint("a")]); 5];
        let crawler = SaintCrawler::new(&config, FakeSource::new(pages)).unwrap();

        let saints = crawler.crawl_letter('C').await.unwrap();

        assert_eq!(saints.len(), 2);
        assert_eq!(crawler.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn calendar_crawl_is_a_single_fetch() {
        let pages = vec![Some(vec![saint("a"), saint("b")])];
        let crawler = SaintCrawler::new(&test_config(), FakeSource::new(pages)).unwrap();

        let saints = crawler.crawl_calendar(3, 5).await.unwrap();

        assert_eq!(saints.unwrap().len(), 2);
        assert_eq!(crawler.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn calendar_crawl_passes_absent_through() {
        let crawler = SaintCrawler::new(&test_config(), FakeSource::new(vec![None])).unwrap();
        assert!(crawler.crawl_calendar(2, 31).await.unwrap().is_none());
    }
}
