//! Classified extraction errors.
//!
//! Recoverable errors mean one record is skipped with a warning; anything
//! else aborts the crawl.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ExtractError {
    /// The detail page has no anchor labeled "IMDb".
    #[error("Skipped {url}: IMDb URL not found")]
    MissingImdbReference { url: String },

    /// The IMDb anchor exists but its href carries no `tt<digits>` segment.
    #[error("Skipped {url}: IMDb ID not found in {reference}")]
    MissingImdbId { url: String, reference: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl ExtractError {
    pub fn missing_imdb_reference(url: &str) -> Self {
        Self::MissingImdbReference {
            url: url.to_string(),
        }
    }

    pub fn missing_imdb_id(url: &str, reference: &str) -> Self {
        Self::MissingImdbId {
            url: url.to_string(),
            reference: reference.to_string(),
        }
    }

    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the caller may skip this record and continue the crawl.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingImdbReference { .. } => true,
            Self::MissingImdbId { .. } => true,
            Self::InvalidSelector { .. } => false,
        }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_record_errors_are_recoverable() {
        assert!(ExtractError::missing_imdb_reference("https://x/a/").is_recoverable());
        assert!(ExtractError::missing_imdb_id("https://x/a/", "https://imdb.com/").is_recoverable());
        assert!(!ExtractError::invalid_selector("h3..", "parse failure").is_recoverable());
    }

    #[test]
    fn messages_name_the_offending_url() {
        let err = ExtractError::missing_imdb_reference("https://aftercredits.com/x/");
        assert_eq!(
            err.to_string(),
            "Skipped https://aftercredits.com/x/: IMDb URL not found"
        );
    }
}
