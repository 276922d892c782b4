//! Core record type produced by detail-page extraction.

use serde::{Deserialize, Serialize};

/// One successfully extracted stinger entry.
///
/// The IMDb ID is the primary key of the store; rating and votes default to 0
/// when the source page carries no rating widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StingerRecord {
    /// IMDb title identifier, e.g. `tt0848228`.
    pub imdb_id: String,
    pub rating: i64,
    pub votes: i64,
    /// Category tags in document order. May be empty.
    pub tags: Vec<String>,
    /// Detail page this record was extracted from.
    pub source_url: String,
}

impl StingerRecord {
    /// Tags joined for single-column display.
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_joined_formats_with_comma_space() {
        let record = StingerRecord {
            imdb_id: "tt0848228".to_string(),
            rating: 8,
            votes: 152,
            tags: vec!["During Credits".to_string(), "After Credits".to_string()],
            source_url: "https://aftercredits.com/2012/05/the-avengers/".to_string(),
        };
        assert_eq!(record.tags_joined(), "During Credits, After Credits");
    }

    #[test]
    fn tags_joined_empty_is_empty_string() {
        let record = StingerRecord {
            imdb_id: "tt0111161".to_string(),
            rating: 0,
            votes: 0,
            tags: Vec::new(),
            source_url: "https://aftercredits.com/x/".to_string(),
        };
        assert_eq!(record.tags_joined(), "");
    }
}
