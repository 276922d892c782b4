//! End-of-run report table.
//!
//! Column widths grow to the widest value; numeric columns are
//! right-aligned, tags left-aligned, headers centered. Each data row is
//! preceded by its source URL.

use crate::domain::StingerRecord;

const HEADERS: [&str; 4] = ["IMDb ID", "Rating", "Votes", "Tags"];

/// Render the report as log-ready lines.
///
/// With no records the output is just the header and separator, sized from
/// the header widths.
pub fn render_report(records: &[StingerRecord]) -> Vec<String> {
    let widths = column_widths(records);
    let mut lines = Vec::with_capacity(2 + records.len() * 2);

    lines.push(format!(
        "{:^w0$} | {:^w1$} | {:^w2$} | {:<w3$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    ));
    lines.push(format!(
        "{}|{}|{}|{}",
        "-".repeat(widths[0] + 1),
        "-".repeat(widths[1] + 2),
        "-".repeat(widths[2] + 2),
        "-".repeat(widths[3] + 1),
    ));

    for record in records {
        lines.push(record.source_url.clone());
        lines.push(format!(
            "{:>w0$} | {:>w1$} | {:>w2$} | {:<w3$}",
            record.imdb_id,
            record.rating,
            record.votes,
            record.tags_joined(),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        ));
    }

    lines
}

/// max(header width, widest value) per column.
fn column_widths(records: &[StingerRecord]) -> [usize; 4] {
    let mut widths = [
        HEADERS[0].len(),
        HEADERS[1].len(),
        HEADERS[2].len(),
        HEADERS[3].len(),
    ];
    for record in records {
        widths[0] = widths[0].max(record.imdb_id.chars().count());
        widths[1] = widths[1].max(record.rating.to_string().len());
        widths[2] = widths[2].max(record.votes.to_string().len());
        widths[3] = widths[3].max(record.tags_joined().chars().count());
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(imdb_id: &str, rating: i64, votes: i64, tags: &[&str], url: &str) -> StingerRecord {
        StingerRecord {
            imdb_id: imdb_id.to_string(),
            rating,
            votes,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            source_url: url.to_string(),
        }
    }

    #[test]
    fn empty_report_is_header_and_separator() {
        let lines = render_report(&[]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "IMDb ID | Rating | Votes | Tags");
        assert_eq!(lines[1], "--------|--------|-------|-----");
    }

    #[test]
    fn columns_widen_to_fit_values() {
        let lines = render_report(&[record(
            "tt0848228",
            8,
            152,
            &["During Credits", "After Credits"],
            "https://aftercredits.com/2012/05/the-avengers/",
        )]);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "https://aftercredits.com/2012/05/the-avengers/");
        assert_eq!(
            lines[3],
            "tt0848228 |      8 |   152 | During Credits, After Credits"
        );
        // Header centered over the widened ID column.
        assert_eq!(lines[0].trim_end(), " IMDb ID  | Rating | Votes | Tags");
        assert_eq!(lines[0].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn numeric_columns_right_align() {
        let lines = render_report(&[
            record("tt0000001", 10, 12345, &["A"], "https://x/a/"),
            record("tt0000002", 7, 3, &["B"], "https://x/b/"),
        ]);
        assert_eq!(lines[3], "tt0000001 |     10 | 12345 | A   ");
        assert_eq!(lines[5], "tt0000002 |      7 |     3 | B   ");
    }
}
