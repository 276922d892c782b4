//! Infrastructure layer: HTTP, HTML parsing, persistence and external tools.

pub mod config;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod readme;
pub mod store;
pub mod worktree;

pub use config::AppConfig;
pub use http_client::{FetchPage, HttpClient, HttpClientConfig};
pub use logging::init_logging;
pub use parsing::{
    DetailContext, DetailParser, ExtractError, ExtractResult, ListingContext, ListingPage,
    ListingParser,
};
pub use store::{STORE_WRAP_WIDTH, StingerStore, StoreEntry};
