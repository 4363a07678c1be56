use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::diary::DiarySource;
use crate::enrich::enrich;
use crate::models::EnrichedFilmEntry;
use crate::output::{ensure_dir, write_json};
use crate::tmdb::MovieSearch;

const SAMPLE_SIZE: usize = 3;

/// What a finished run produced.
pub struct RunSummary {
    pub path: PathBuf,
    pub films: Vec<EnrichedFilmEntry>,
}

/// Scrape → enrich → write. Errors from the directory setup, the scrape or
/// the final write are returned; per-title lookup failures are absorbed by
/// [`enrich`].
pub async fn run<D, S>(config: &Config, diary: &D, search: &S) -> Result<RunSummary>
where
    D: DiarySource,
    S: MovieSearch,
{
    let path = config.output_path();
    ensure_dir(&config.out_dir).await?;

    let entries = diary
        .scrape()
        .await
        .context("Failed to scrape Letterboxd diary")?;

    if entries.is_empty() {
        warn!("No movies found on Letterboxd");
        write_json(&path, &[]).await?;
        info!("Empty JSON written to {}", path.display());
        return Ok(RunSummary {
            path,
            films: Vec::new(),
        });
    }

    let films = enrich(search, &config.image_base, entries).await;

    write_json(&path, &films).await?;
    info!("JSON successfully written to {}", path.display());

    match render_sample(&films) {
        Ok(sample) => println!("Sample output:\n{}", sample),
        Err(e) => warn!("Could not render sample output: {}", e),
    }

    Ok(RunSummary { path, films })
}

/// The first few results, pretty-printed.
fn render_sample(films: &[EnrichedFilmEntry]) -> serde_json::Result<String> {
    let n = films.len().min(SAMPLE_SIZE);
    serde_json::to_string_pretty(&films[..n])
}
