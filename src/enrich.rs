use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::models::{EnrichedFilmEntry, FilmEntry};
use crate::tmdb::{poster_url, MovieSearch};

/// Attach a poster URL to every entry, one lookup at a time.
///
/// Output has the same length and order as `entries`. A failed lookup is
/// logged and yields `poster_url: None`; it never aborts the remaining titles.
pub async fn enrich<S: MovieSearch>(
    search: &S,
    image_base: &str,
    entries: Vec<FilmEntry>,
) -> Vec<EnrichedFilmEntry> {
    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut enriched = Vec::with_capacity(entries.len());
    let mut failed = 0usize;

    for entry in entries {
        pb.set_message(entry.title.clone());
        let poster = match search.search(&entry.title).await {
            Ok(found) => {
                info!("Enriched \"{}\"", entry.title);
                poster_url(image_base, found.as_ref())
            }
            Err(e) => {
                failed += 1;
                warn!(
                    "Failed to enrich \"{}\": {:#}",
                    entry.title,
                    anyhow::Error::from(e)
                );
                None
            }
        };
        enriched.push(EnrichedFilmEntry::new(entry, poster));
        pb.inc(1);
    }

    pb.finish_and_clear();
    if failed > 0 {
        warn!("{} of {} titles could not be enriched", failed, enriched.len());
    }
    enriched
}
