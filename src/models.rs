use serde::{Deserialize, Serialize};

/// One film scraped from the diary listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmEntry {
    pub title: String,
    pub letterboxd_url: Option<String>,
}

/// A diary film with its poster resolved (or not) against TMDb.
///
/// Field order is the serialized key order: title, letterboxdUrl, posterUrl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedFilmEntry {
    pub title: String,
    pub letterboxd_url: Option<String>,
    pub poster_url: Option<String>,
}

impl EnrichedFilmEntry {
    pub fn new(entry: FilmEntry, poster_url: Option<String>) -> Self {
        Self {
            title: entry.title,
            letterboxd_url: entry.letterboxd_url,
            poster_url,
        }
    }
}
