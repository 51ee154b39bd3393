// src/services/fetcher.rs

//! Page fetching and entry-list extraction.
//!
//! One fetch retrieves a directory page, isolates the first table (the entry
//! list), and splits its text into raw per-entry blocks for the parser.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::Saint;
use crate::parse::saint::parse_saint;

/// Entry-number marker separating entries in the table text, e.g. "12 >".
static ENTRY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+ >").expect("entry marker pattern is valid"));

/// Source of parsed directory pages.
///
/// Implemented by [`PageFetcher`] for the live site; the crawler is generic
/// over this trait so pagination can be driven against a fake source.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page. `Ok(None)` means the page does not exist: the end of
    /// a name-index partition, or a calendar day without an entry list.
    async fn fetch(&self, url: &Url) -> Result<Option<Vec<Saint>>>;
}

/// HTTP-backed page source for the directory site.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher around a configured HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Extract parsed entries from a fetched document.
    ///
    /// Returns `None` when the page carries no entry table. The fragment
    /// before the first entry marker is navigation preamble and is
    /// discarded; blocks that fail to parse are filtered out.
    fn extract_entries(html: &str) -> Result<Option<Vec<Saint>>> {
        let document = Html::parse_document(html);
        let table_sel = Self::parse_selector("table")?;

        let Some(table) = document.select(&table_sel).next() else {
            return Ok(None);
        };

        let text = table
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let saints = ENTRY_MARKER
            .split(&text)
            .skip(1)
            .filter_map(parse_saint)
            .collect();

        Ok(Some(saints))
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, url: &Url) -> Result<Option<Vec<Saint>>> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        // Missing pages end a partition; anything else non-2xx is a real
        // failure and must not be mistaken for the end of pagination.
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::crawl(
                url.as_str(),
                format!("unexpected HTTP status {status}"),
            ));
        }

        let html = response.text().await?;
        let entries = Self::extract_entries(&html)?;
        if entries.is_none() {
            log::debug!("no entry table at {url}");
        }
        Ok(entries)
    }
}
