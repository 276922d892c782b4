//! Detail page parser: IMDb ID, rating, votes and category tags.

use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::{DetailContext, ExtractError, ExtractResult, compile_selectors};
use crate::domain::StingerRecord;
use crate::infrastructure::config::DetailSelectors;

/// Visible anchor text that marks the external reference link.
const IMDB_ANCHOR_TEXT: &str = "IMDb";

/// Parser for stinger detail pages.
pub struct DetailParser {
    reference_anchor_selectors: Vec<Selector>,
    category_tag_selectors: Vec<Selector>,
    rating_value_selectors: Vec<Selector>,
    imdb_id_pattern: Regex,
}

impl DetailParser {
    /// Create a detail parser with the default selectors.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(&DetailSelectors::default())
    }

    /// Create a detail parser with custom selector configuration.
    pub fn with_config(selectors: &DetailSelectors) -> anyhow::Result<Self> {
        Ok(Self {
            reference_anchor_selectors: compile_selectors(&selectors.reference_anchor)?,
            category_tag_selectors: compile_selectors(&selectors.category_tag)?,
            rating_value_selectors: compile_selectors(&selectors.rating_value)?,
            imdb_id_pattern: Regex::new(r"/(tt\d+)/")
                .map_err(|e| anyhow::anyhow!("Failed to compile IMDb ID pattern: {}", e))?,
        })
    }

    /// Extract one record from a detail page.
    ///
    /// A missing IMDb anchor or an unrecognizable reference URL fails with a
    /// recoverable error; the caller skips the record and continues.
    pub fn parse_detail(
        &self,
        html: &Html,
        context: &DetailContext,
    ) -> ExtractResult<StingerRecord> {
        let reference = self
            .find_imdb_reference(html)
            .ok_or_else(|| ExtractError::missing_imdb_reference(&context.url))?;

        let imdb_id = self
            .imdb_id_pattern
            .captures(&reference)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
            .ok_or_else(|| ExtractError::missing_imdb_id(&context.url, &reference))?;

        let tags = self.extract_tags(html);
        let (rating, votes) = self.extract_rating(html, &context.url);

        debug!(
            "Extracted {} (rating {}, {} votes, {} tags) from {}",
            imdb_id,
            rating,
            votes,
            tags.len(),
            context.url
        );

        Ok(StingerRecord {
            imdb_id,
            rating,
            votes,
            tags,
            source_url: context.url.clone(),
        })
    }

    /// Find the href of the first anchor whose visible text is exactly "IMDb".
    fn find_imdb_reference(&self, html: &Html) -> Option<String> {
        for selector in &self.reference_anchor_selectors {
            let hit = html.select(selector).find_map(|anchor| {
                let text = anchor.text().collect::<String>();
                if text.trim() == IMDB_ANCHOR_TEXT {
                    anchor.value().attr("href").map(str::to_string)
                } else {
                    None
                }
            });
            if hit.is_some() {
                return hit;
            }
        }
        None
    }

    /// Collect category tag texts in document order. May be empty.
    fn extract_tags(&self, html: &Html) -> Vec<String> {
        for selector in &self.category_tag_selectors {
            let tags: Vec<String> = html
                .select(selector)
                .map(|element| element.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty())
                .collect();
            if !tags.is_empty() {
                return tags;
            }
        }
        Vec::new()
    }

    /// Read rating and votes from the rating widget, positionally.
    ///
    /// An absent widget, a short value list, or malformed numeric text all
    /// degrade to 0 for the affected position instead of failing the record.
    fn extract_rating(&self, html: &Html, url: &str) -> (i64, i64) {
        for selector in &self.rating_value_selectors {
            let values: Vec<String> = html
                .select(selector)
                .map(|element| element.text().collect::<String>().trim().to_string())
                .collect();
            if !values.is_empty() {
                let rating = self.parse_rating_value(&values, 0, "rating", url);
                let votes = self.parse_rating_value(&values, 1, "votes", url);
                return (rating, votes);
            }
        }
        (0, 0)
    }

    fn parse_rating_value(&self, values: &[String], index: usize, field: &str, url: &str) -> i64 {
        match values.get(index) {
            Some(text) => match text.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    warn!("Unparsable {} value '{}' on {}, using 0", field, text, url);
                    0
                }
            },
            None => {
                warn!("Rating widget on {} has no {} value, using 0", url, field);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_URL: &str = "https://aftercredits.com/2012/05/the-avengers/";

    fn parse(html: &str) -> ExtractResult<StingerRecord> {
        let parser = DetailParser::new().unwrap();
        let document = Html::parse_document(html);
        parser.parse_detail(&document, &DetailContext::new(DETAIL_URL))
    }

    fn full_page() -> &'static str {
        r#"
        <ul>
            <li class="entry-category"><a href="/category/stingers/">During Credits</a></li>
            <li class="entry-category"><a href="/category/stingers/">After Credits</a></li>
        </ul>
        <a href="https://www.imdb.com/title/tt0848228/">IMDb</a>
        <span class="post-ratings">Rating: <strong>8</strong>/10 (<strong>152</strong> votes)</span>
        "#
    }

    #[test]
    fn extracts_full_record() {
        let record = parse(full_page()).unwrap();
        assert_eq!(record.imdb_id, "tt0848228");
        assert_eq!(record.rating, 8);
        assert_eq!(record.votes, 152);
        assert_eq!(record.tags, vec!["During Credits", "After Credits"]);
        assert_eq!(record.source_url, DETAIL_URL);
    }

    #[test]
    fn missing_imdb_anchor_is_recoverable() {
        let err = parse(r#"<a href="https://example.com/">Elsewhere</a>"#).unwrap_err();
        assert!(matches!(err, ExtractError::MissingImdbReference { .. }));
        assert!(err.is_recoverable());
        assert!(err.to_string().contains(DETAIL_URL));
    }

    #[test]
    fn reference_without_title_id_is_recoverable() {
        let err = parse(r#"<a href="https://www.imdb.com/search/">IMDb</a>"#).unwrap_err();
        assert!(matches!(err, ExtractError::MissingImdbId { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn anchor_text_must_match_exactly() {
        let err = parse(r#"<a href="https://www.imdb.com/title/tt1/">IMDb page</a>"#).unwrap_err();
        assert!(matches!(err, ExtractError::MissingImdbReference { .. }));
    }

    #[test]
    fn absent_rating_widget_defaults_to_zero() {
        let record = parse(r#"<a href="https://www.imdb.com/title/tt0111161/">IMDb</a>"#).unwrap();
        assert_eq!(record.rating, 0);
        assert_eq!(record.votes, 0);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn short_rating_widget_defaults_votes_to_zero() {
        let record = parse(
            r#"
            <a href="https://www.imdb.com/title/tt0111161/">IMDb</a>
            <span class="post-ratings"><strong>7</strong></span>
            "#,
        )
        .unwrap();
        assert_eq!(record.rating, 7);
        assert_eq!(record.votes, 0);
    }

    #[test]
    fn malformed_rating_text_defaults_to_zero() {
        let record = parse(
            r#"
            <a href="https://www.imdb.com/title/tt0111161/">IMDb</a>
            <span class="post-ratings"><strong>N/A</strong><strong>152</strong></span>
            "#,
        )
        .unwrap();
        assert_eq!(record.rating, 0);
        assert_eq!(record.votes, 152);
    }
}
