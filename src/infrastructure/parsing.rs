//! HTML parsing for listing and detail pages.
//!
//! Parsers compile their CSS selectors once at construction and classify
//! per-record failures as recoverable errors.

pub mod context;
pub mod detail_parser;
pub mod error;
pub mod listing_parser;

pub use context::{DetailContext, ListingContext};
pub use detail_parser::DetailParser;
pub use error::{ExtractError, ExtractResult};
pub use listing_parser::{ListingPage, ListingParser};

use scraper::Selector;
use tracing::warn;

/// Compile selector strings, warning on individual failures.
///
/// Errors only when no selector in the list compiles.
pub(crate) fn compile_selectors(selector_strings: &[String]) -> anyhow::Result<Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut errors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                warn!("Failed to compile selector '{}': {}", selector_str, e);
                errors.push(format!("'{}': {}", selector_str, e));
            }
        }
    }

    if selectors.is_empty() {
        return Err(anyhow::anyhow!(
            "No valid selectors compiled. Errors: {}",
            errors.join(", ")
        ));
    }

    Ok(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_valid_selectors() {
        let selectors = compile_selectors(&["h3.entry-title a".to_string()]).unwrap();
        assert_eq!(selectors.len(), 1);
    }

    #[test]
    fn skips_broken_selectors_when_a_fallback_compiles() {
        let selectors =
            compile_selectors(&["h3..".to_string(), "h2.entry-title a".to_string()]).unwrap();
        assert_eq!(selectors.len(), 1);
    }

    #[test]
    fn errors_when_nothing_compiles() {
        assert!(compile_selectors(&["h3..".to_string()]).is_err());
    }
}
