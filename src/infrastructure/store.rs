//! Keyed YAML store for extracted records.
//!
//! One top-level key per IMDb ID, each value rendered as a compact flow
//! mapping so the file stays human-diffable. Insertion order is preserved;
//! re-crawling an ID overwrites its entry in place.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::StingerRecord;

/// Line-wrap width for serialized entries.
pub const STORE_WRAP_WIDTH: usize = 200;

/// Continuation indent for wrapped tag sequences.
const WRAP_INDENT: &str = "    ";

/// Stored value for one IMDb ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEntry {
    pub rating: i64,
    pub votes: i64,
    pub tags: Vec<String>,
}

impl From<&StingerRecord> for StoreEntry {
    fn from(record: &StingerRecord) -> Self {
        Self {
            rating: record.rating,
            votes: record.votes,
            tags: record.tags.clone(),
        }
    }
}

/// Ordered IMDb ID -> entry mapping persisted as a single YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StingerStore {
    entries: IndexMap<String, StoreEntry>,
}

impl StingerStore {
    /// Load a store from disk. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Store file {} not found, starting empty", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read store file {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let entries: IndexMap<String, StoreEntry> = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse store file {}", path.display()))?;

        debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Insert or overwrite the entry for an IMDb ID.
    ///
    /// An existing key keeps its position in the file; last write wins.
    pub fn upsert(&mut self, imdb_id: String, entry: StoreEntry) {
        self.entries.insert(imdb_id, entry);
    }

    pub fn get(&self, imdb_id: &str) -> Option<&StoreEntry> {
        self.entries.get(imdb_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StoreEntry)> {
        self.entries.iter()
    }

    /// Serialize the whole mapping and overwrite the store file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_yaml_string())
            .with_context(|| format!("Failed to write store file {}", path.display()))?;
        info!("Saved {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Deterministic YAML rendering: one flow mapping per entry, wrapped at
    /// [`STORE_WRAP_WIDTH`] columns inside the tag sequence.
    pub fn to_yaml_string(&self) -> String {
        let mut out = String::new();
        for (imdb_id, entry) in &self.entries {
            for line in render_entry_lines(imdb_id, entry, STORE_WRAP_WIDTH) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

fn render_entry_lines(key: &str, entry: &StoreEntry, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = format!(
        "{}: {{rating: {}, votes: {}, tags: [",
        yaml_scalar(key),
        entry.rating,
        entry.votes
    );

    for (i, tag) in entry.tags.iter().enumerate() {
        let mut piece = yaml_scalar(tag);
        if i + 1 < entry.tags.len() {
            piece.push(',');
        }
        if i == 0 {
            line.push_str(&piece);
        } else if line.len() + piece.len() + 3 > width {
            // "]}" plus the joining space must still fit
            lines.push(line);
            line = format!("{}{}", WRAP_INDENT, piece);
        } else {
            line.push(' ');
            line.push_str(&piece);
        }
    }

    line.push_str("]}");
    lines.push(line);
    lines
}

/// Render a string as a YAML flow scalar, single-quoting when a plain scalar
/// would be ambiguous.
fn yaml_scalar(value: &str) -> String {
    if needs_quoting(value) {
        format!("'{}'", value.replace('\'', "''"))
    } else {
        value.to_string()
    }
}

fn needs_quoting(value: &str) -> bool {
    if value.is_empty() || value.trim() != value {
        return true;
    }
    if value
        .chars()
        .any(|c| matches!(c, ':' | ',' | '[' | ']' | '{' | '}' | '#' | '\'' | '"' | '\n'))
    {
        return true;
    }
    if matches!(value.chars().next(), Some('-' | '?' | '&' | '*' | '!' | '|' | '>' | '%' | '@' | '`')) {
        return true;
    }
    // Scalars YAML would read back as something other than a string.
    if value.parse::<f64>().is_ok() {
        return true;
    }
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "false" | "yes" | "no" | "null" | "~" | "on" | "off"
    )
}
