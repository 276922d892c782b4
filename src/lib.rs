//! AfterCredits stinger crawler.
//!
//! Walks the paginated aftercredits.com stinger listing, extracts IMDb ID,
//! rating, votes and category tags from each detail page, and persists them
//! into an insertion-ordered YAML store keyed by IMDb ID.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{CrawlEngine, CrawlSummary, render_report};
pub use domain::StingerRecord;
pub use infrastructure::{
    AppConfig, FetchPage, HttpClient, HttpClientConfig, StingerStore, StoreEntry,
};
