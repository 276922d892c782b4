//! Context objects carried through parsing operations.

/// Context for parsing one listing page.
#[derive(Debug, Clone)]
pub struct ListingContext {
    /// 1-based page number within the crawl.
    pub page: u32,

    /// URL of the page being parsed; base for resolving relative links.
    pub url: String,
}

impl ListingContext {
    pub fn new(page: u32, url: impl Into<String>) -> Self {
        Self {
            page,
            url: url.into(),
        }
    }
}

/// Context for parsing one detail page.
#[derive(Debug, Clone)]
pub struct DetailContext {
    /// URL of the detail page being parsed.
    pub url: String,
}

impl DetailContext {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
