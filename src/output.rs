use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::EnrichedFilmEntry;

/// Create `dir` and any missing parents. No-op when it already exists.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

/// Two-space indented JSON array with a trailing newline.
pub fn render_json(entries: &[EnrichedFilmEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    Ok(json)
}

/// Replace `path` with the rendered entries.
///
/// The content is written to a sibling temp file first and renamed into
/// place, so readers never see a half-written document.
pub async fn write_json(path: &Path, entries: &[EnrichedFilmEntry]) -> Result<()> {
    let json = render_json(entries)?;
    let tmp = temp_path(path);

    tokio::fs::write(&tmp, json)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
