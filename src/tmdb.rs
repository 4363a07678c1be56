use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::fetch::{Fetcher, RequestError};

/// A single TMDb search hit. Only `poster_path` feeds the output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataMatch {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MetadataMatch>,
}

/// Title lookup against a movie database.
pub trait MovieSearch {
    /// Best match for `title` as ranked by the service, or `None` when
    /// nothing matched.
    async fn search(&self, title: &str) -> Result<Option<MetadataMatch>, RequestError>;
}

pub struct TmdbClient<'a> {
    fetcher: &'a Fetcher,
    api_base: &'a str,
    api_key: &'a str,
}

impl<'a> TmdbClient<'a> {
    pub fn new(fetcher: &'a Fetcher, config: &'a Config) -> Self {
        Self {
            fetcher,
            api_base: &config.api_base,
            api_key: config.api_key.as_deref().unwrap_or_default(),
        }
    }
}

impl MovieSearch for TmdbClient<'_> {
    async fn search(&self, title: &str) -> Result<Option<MetadataMatch>, RequestError> {
        let request = self
            .fetcher
            .client()
            .get(format!("{}/search/movie", self.api_base))
            .query(&[("api_key", self.api_key), ("query", title)]);

        let response: SearchResponse = self.fetcher.get_json(request).await?;
        let first = response.results.into_iter().next();
        if let Some(m) = &first {
            debug!("TMDb match for {:?}: id={:?} title={:?}", title, m.id, m.title);
        }
        Ok(first)
    }
}

/// Full poster URL for a match: the image base followed by the poster path, verbatim.
pub fn poster_url(image_base: &str, found: Option<&MetadataMatch>) -> Option<String> {
    found
        .and_then(|m| m.poster_path.as_deref())
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", image_base, p))
}
