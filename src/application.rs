//! Application layer: the crawl orchestration and reporting.

pub mod crawl_engine;
pub mod report;

pub use crawl_engine::{CrawlEngine, CrawlSummary};
pub use report::render_report;
