//! Listing page parser: detail-page links and the next-page anchor.

use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use super::{ListingContext, compile_selectors};
use crate::infrastructure::config::ListingSelectors;

/// One parsed listing page. Lives for a single loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Detail page URLs in document order.
    pub detail_urls: Vec<String>,

    /// Next listing page, absent when pagination is exhausted.
    pub next_page: Option<String>,
}

/// Parser for the paginated category listing.
pub struct ListingParser {
    entry_link_selectors: Vec<Selector>,
    next_page_selectors: Vec<Selector>,
}

impl ListingParser {
    /// Create a listing parser with the default selectors.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(&ListingSelectors::default())
    }

    /// Create a listing parser with custom selector configuration.
    pub fn with_config(selectors: &ListingSelectors) -> anyhow::Result<Self> {
        Ok(Self {
            entry_link_selectors: compile_selectors(&selectors.entry_link)?,
            next_page_selectors: compile_selectors(&selectors.next_page)?,
        })
    }

    /// Extract detail links and the next-page URL from a listing page.
    ///
    /// An empty link list is not an error; a category page may legitimately
    /// hold no entries.
    pub fn parse_listing(&self, html: &Html, context: &ListingContext) -> ListingPage {
        debug!("Parsing listing page {}", context.page);

        let mut detail_urls = Vec::new();
        for selector in &self.entry_link_selectors {
            for element in html.select(selector) {
                if let Some(href) = element.value().attr("href") {
                    match self.resolve_url(href, &context.url) {
                        Some(url) => detail_urls.push(url),
                        None => warn!(
                            "Dropping unresolvable entry link '{}' on page {}",
                            href, context.page
                        ),
                    }
                }
            }
            if !detail_urls.is_empty() {
                break;
            }
        }

        let next_page = self.find_next_page(html, &context.url);

        debug!(
            "Page {} yielded {} detail links (next page: {})",
            context.page,
            detail_urls.len(),
            next_page.as_deref().unwrap_or("none")
        );

        ListingPage {
            detail_urls,
            next_page,
        }
    }

    fn find_next_page(&self, html: &Html, base_url: &str) -> Option<String> {
        for selector in &self.next_page_selectors {
            if let Some(anchor) = html.select(selector).next() {
                if let Some(href) = anchor.value().attr("href") {
                    return self.resolve_url(href, base_url);
                }
            }
        }
        None
    }

    /// Resolve a possibly relative href against the page URL.
    fn resolve_url(&self, href: &str, base_url: &str) -> Option<String> {
        if let Ok(url) = Url::parse(href) {
            return Some(url.to_string());
        }
        match Url::parse(base_url).and_then(|base| base.join(href)) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                warn!("Failed to resolve '{}' against '{}': {}", href, base_url, e);
                None
            }
        }
    }
}
