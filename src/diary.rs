use tracing::info;

use crate::config::Config;
use crate::fetch::{Fetcher, RequestError};
use crate::models::FilmEntry;
use crate::parser::parse_diary_html;

/// Somewhere diary films come from.
pub trait DiarySource {
    async fn scrape(&self) -> Result<Vec<FilmEntry>, RequestError>;
}

/// Scrapes the most recent page of a user's public Letterboxd diary.
pub struct DiaryScraper<'a> {
    fetcher: &'a Fetcher,
    config: &'a Config,
}

impl<'a> DiaryScraper<'a> {
    pub fn new(fetcher: &'a Fetcher, config: &'a Config) -> Self {
        Self { fetcher, config }
    }
}

impl DiarySource for DiaryScraper<'_> {
    async fn scrape(&self) -> Result<Vec<FilmEntry>, RequestError> {
        let url = self.config.diary_url();
        info!("Scraping Letterboxd: {}", url);

        let html = self.fetcher.get_text(&url).await?;
        let films = parse_diary_html(&html, &self.config.site_origin);

        info!("Found {} movies", films.len());
        Ok(films)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::serve_once;
    use crate::throttle::Throttle;

    const PAGE: &str = r#"<ul class="poster-list">
        <li><div class="film-poster"><img alt="Heat"><a href="/film/heat/"></a></div></li>
        <li><div class="film-poster"><img alt="Ronin"><a href="/film/ronin/"></a></div></li>
    </ul>"#;

    #[tokio::test]
    async fn scrapes_first_page_of_user() {
        let (base, server) = serve_once("200 OK", PAGE).await;
        let config = Config {
            username: "someone".into(),
            site_origin: base.clone(),
            ..Config::default()
        };
        let fetcher = Fetcher::new(Throttle::None);

        let films = DiaryScraper::new(&fetcher, &config).scrape().await.unwrap();

        assert_eq!(films.len(), 2);
        assert_eq!(films[1].title, "Ronin");
        assert_eq!(
            films[1].letterboxd_url.as_deref(),
            Some(format!("{}/film/ronin/", base).as_str())
        );
        let head = server.await.unwrap();
        assert!(head.starts_with("GET /someone/films/page/1/ "), "{}", head);
    }

    #[tokio::test]
    async fn http_failure_propagates() {
        let (base, _server) = serve_once("500 Internal Server Error", "").await;
        let config = Config {
            site_origin: base,
            ..Config::default()
        };
        let fetcher = Fetcher::new(Throttle::None);

        let err = DiaryScraper::new(&fetcher, &config).scrape().await.unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 500, .. }));
    }
}
