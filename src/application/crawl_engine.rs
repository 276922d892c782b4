//! Sequential crawl loop: listing pages, detail pages, store upserts.

use std::collections::HashSet;

use anyhow::Result;
use scraper::Html;
use tracing::{info, trace, warn};

use crate::domain::StingerRecord;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http_client::FetchPage;
use crate::infrastructure::parsing::{DetailContext, DetailParser, ListingContext, ListingParser};
use crate::infrastructure::store::{StingerStore, StoreEntry};

/// Outcome of a completed crawl.
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// Successfully extracted records, in crawl order.
    pub records: Vec<StingerRecord>,
    pub pages_visited: u32,
    /// Detail pages skipped on a recoverable extraction error.
    pub skipped: u32,
}

/// Drives the pagination loop over a page source.
///
/// Strictly sequential: one request in flight at a time, no retry. Transport
/// failures propagate and abort the run.
pub struct CrawlEngine<F: FetchPage> {
    fetcher: F,
    listing_parser: ListingParser,
    detail_parser: DetailParser,
}

impl<F: FetchPage> CrawlEngine<F> {
    pub fn new(fetcher: F, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            listing_parser: ListingParser::with_config(&config.listing_selectors)?,
            detail_parser: DetailParser::with_config(&config.detail_selectors)?,
        })
    }

    /// Walk the listing from `start_url` until no next-page link remains,
    /// upserting every extracted record into `store`.
    pub async fn crawl(&self, start_url: &str, store: &mut StingerStore) -> Result<CrawlSummary> {
        let mut records = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut page_num = 0u32;
        let mut skipped = 0u32;
        let mut url = Some(start_url.to_string());

        while let Some(current) = url.take() {
            // A cyclic next-page link would otherwise loop forever.
            if !visited.insert(current.clone()) {
                warn!("Already visited {}, stopping pagination", current);
                break;
            }

            page_num += 1;
            info!("Parsing page {}: {}", page_num, current);

            let body = self.fetcher.fetch_page(&current).await?;
            let listing = {
                let html = Html::parse_document(&body);
                let context = ListingContext::new(page_num, current.clone());
                self.listing_parser.parse_listing(&html, &context)
            };

            for detail_url in listing.detail_urls {
                trace!("Parsing media: {}", detail_url);
                match self.extract_detail(&detail_url).await? {
                    Some(record) => {
                        store.upsert(record.imdb_id.clone(), StoreEntry::from(&record));
                        records.push(record);
                    }
                    None => skipped += 1,
                }
            }

            url = listing.next_page;
        }

        info!(
            "Crawl finished: {} pages, {} records, {} skipped",
            page_num,
            records.len(),
            skipped
        );

        Ok(CrawlSummary {
            records,
            pages_visited: page_num,
            skipped,
        })
    }

    /// Fetch and extract one detail page.
    ///
    /// Recoverable extraction errors are logged and swallowed (`None`);
    /// anything else propagates.
    async fn extract_detail(&self, detail_url: &str) -> Result<Option<StingerRecord>> {
        let body = self.fetcher.fetch_page(detail_url).await?;
        let html = Html::parse_document(&body);
        let context = DetailContext::new(detail_url);

        match self.detail_parser.parse_detail(&html, &context) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
