//! Crawl configuration: start URL, file paths and CSS selectors.
//!
//! Selectors are configured as fallback lists and compiled up front by the
//! parsers; the defaults match the aftercredits.com markup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Category listing the crawl starts from.
pub const STINGERS_URL: &str = "https://aftercredits.com/category/stingers/";

/// Main crawl configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// First listing page URL.
    pub start_url: String,

    /// YAML store file, relative to the working directory.
    pub store_path: PathBuf,

    /// README whose timestamp line is rewritten after a store change.
    pub readme_path: PathBuf,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Accept-Language header sent with every request.
    pub accept_language: String,

    /// Request timeout in seconds.
    pub timeout_seconds: u64,

    pub listing_selectors: ListingSelectors,
    pub detail_selectors: DetailSelectors,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_url: STINGERS_URL.to_string(),
            store_path: PathBuf::from("aftercredits.yml"),
            readme_path: PathBuf::from("README.md"),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:140.0) \
                         Gecko/20100101 Firefox/140.0"
                .to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            timeout_seconds: 30,
            listing_selectors: ListingSelectors::default(),
            detail_selectors: DetailSelectors::default(),
        }
    }
}

/// CSS selectors for listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSelectors {
    /// Selectors for entry title links to detail pages - multiple fallbacks.
    pub entry_link: Vec<String>,

    /// Selectors for the next-page navigation anchor.
    pub next_page: Vec<String>,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            entry_link: vec![
                "h3.entry-title a".to_string(),
                "h2.entry-title a".to_string(),
            ],
            next_page: vec![
                "a[aria-label='next-page']".to_string(),
                "a[rel='next']".to_string(),
            ],
        }
    }
}

/// CSS selectors for detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailSelectors {
    /// Anchor candidates scanned for the exact visible text "IMDb".
    pub reference_anchor: Vec<String>,

    /// Selectors for category tag links.
    pub category_tag: Vec<String>,

    /// Selectors for the rating widget value elements (rating first, votes
    /// second, in document order).
    pub rating_value: Vec<String>,
}

impl Default for DetailSelectors {
    fn default() -> Self {
        Self {
            reference_anchor: vec!["a".to_string()],
            category_tag: vec!["li.entry-category a".to_string()],
            rating_value: vec!["span.post-ratings strong".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_stingers_category() {
        let config = AppConfig::default();
        assert_eq!(config.start_url, STINGERS_URL);
        assert_eq!(config.store_path, PathBuf::from("aftercredits.yml"));
        assert!(config.user_agent.contains("Firefox"));
    }

    #[test]
    fn default_selectors_are_non_empty() {
        let listing = ListingSelectors::default();
        assert!(!listing.entry_link.is_empty());
        assert!(!listing.next_page.is_empty());

        let detail = DetailSelectors::default();
        assert!(!detail.category_tag.is_empty());
        assert!(!detail.rating_value.is_empty());
    }
}
