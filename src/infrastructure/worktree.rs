//! Git working-tree check that gates the README timestamp update.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Whether any uncommitted change in the working tree touches a file with
/// the given extension.
pub fn modified_with_extension(repo_dir: &Path, extension: &str) -> Result<bool> {
    let output = Command::new("git")
        .arg("diff")
        .arg("--name-only")
        .current_dir(repo_dir)
        .output()
        .context("Failed to run git diff")?;

    if !output.status.success() {
        bail!(
            "git diff failed in {}: {}",
            repo_dir.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let modified = any_path_with_extension(stdout.lines(), extension);
    debug!(
        "Working tree {} modified .{} files",
        if modified { "has" } else { "has no" },
        extension
    );
    Ok(modified)
}

fn any_path_with_extension<'a>(paths: impl Iterator<Item = &'a str>, extension: &str) -> bool {
    let suffix = format!(".{extension}");
    paths
        .map(str::trim)
        .any(|path| !path.is_empty() && path.ends_with(&suffix))
}
