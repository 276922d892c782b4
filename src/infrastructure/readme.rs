//! README timestamp line rewrite.
//!
//! Only line index 2 changes; every other byte of the file is preserved.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// 0-based index of the generated-timestamp line.
const TIMESTAMP_LINE_INDEX: usize = 2;

/// Rewrite the timestamp line of the README.
///
/// Returns whether the file was rewritten. A README with fewer than three
/// lines is left untouched with a warning.
pub fn update_timestamp(readme_path: &Path, now: DateTime<Utc>) -> Result<bool> {
    let contents = fs::read_to_string(readme_path)
        .with_context(|| format!("Failed to read {}", readme_path.display()))?;

    let mut lines: Vec<String> = contents.split_inclusive('\n').map(str::to_string).collect();
    if lines.len() <= TIMESTAMP_LINE_INDEX {
        warn!(
            "{} has only {} lines, skipping timestamp update",
            readme_path.display(),
            lines.len()
        );
        return Ok(false);
    }

    lines[TIMESTAMP_LINE_INDEX] = format!("{}\n", timestamp_line(now));
    fs::write(readme_path, lines.concat())
        .with_context(|| format!("Failed to write {}", readme_path.display()))?;

    info!("Updated timestamp in {}", readme_path.display());
    Ok(true)
}

fn timestamp_line(now: DateTime<Utc>) -> String {
    format!("Last generated at: {} UTC", now.format("%B %d, %Y %I:%M %p"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 31, 13, 5, 0).unwrap()
    }

    #[test]
    fn timestamp_line_format() {
        assert_eq!(
            timestamp_line(fixed_now()),
            "Last generated at: August 31, 2026 01:05 PM UTC"
        );
    }

    #[test]
    fn rewrites_only_line_two() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# AfterCredits\n\nLast generated at: never\nBody text.\n").unwrap();

        assert!(update_timestamp(&path, fixed_now()).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "# AfterCredits");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Last generated at: August 31, 2026 01:05 PM UTC");
        assert_eq!(lines[3], "Body text.");
    }

    #[test]
    fn short_readme_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# AfterCredits\n").unwrap();

        assert!(!update_timestamp(&path, fixed_now()).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# AfterCredits\n");
    }

    #[test]
    fn missing_readme_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(update_timestamp(&dir.path().join("README.md"), fixed_now()).is_err());
    }
}
