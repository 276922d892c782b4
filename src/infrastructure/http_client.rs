//! HTTP client for the crawl.
//!
//! One GET per page, fixed browser-like headers, no retry: a transport
//! failure or non-success status aborts the run.

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use scraper::Html;
use tracing::{debug, info};

use crate::infrastructure::config::AppConfig;

/// Configuration for HTTP client behavior.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string sent with every request.
    pub user_agent: String,
    /// Accept-Language header sent with every request.
    pub accept_language: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Log every request at info level instead of debug.
    pub log_requests: bool,
}

impl HttpClientConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            accept_language: config.accept_language.clone(),
            timeout_seconds: config.timeout_seconds,
            log_requests: false,
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

/// Page source for the crawl engine. Lets tests drive the engine without a
/// network.
#[async_trait]
pub trait FetchPage {
    /// Fetch the raw HTML body of one page.
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// Sequential HTTP client over reqwest.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client with custom configuration.
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| anyhow!("Invalid Accept-Language value: {}", e))?,
        );

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Fetch the body of a page as a string.
    ///
    /// Returned as a string rather than a parsed document so the non-Send
    /// `scraper::Html` never crosses an await point.
    pub async fn fetch_html_string(&self, url: &str) -> Result<String> {
        if self.config.log_requests {
            info!("HTTP GET: {}", url);
        } else {
            debug!("HTTP GET: {}", url);
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed for {}: {}", url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error {}: {}", status, url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body from {}: {}", url, e))?;

        if body.is_empty() {
            return Err(anyhow!("Empty response from {}", url));
        }

        Ok(body)
    }

    /// Fetch and parse a page into a document tree.
    pub async fn fetch_html(&self, url: &str) -> Result<Html> {
        let body = self.fetch_html_string(url).await?;
        Ok(Html::parse_document(&body))
    }
}

#[async_trait]
impl FetchPage for HttpClient {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.fetch_html_string(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        let client = HttpClient::with_config(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn config_carries_app_header_values() {
        let config = HttpClientConfig::default();
        assert!(config.user_agent.contains("Firefox"));
        assert_eq!(config.accept_language, "en-US,en;q=0.5");
    }

    #[test]
    fn rejects_unencodable_accept_language() {
        let config = HttpClientConfig {
            accept_language: "en\nus".to_string(),
            ..Default::default()
        };
        assert!(HttpClient::with_config(config).is_err());
    }
}
