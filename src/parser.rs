use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::models::FilmEntry;

static POSTER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".poster-list .film-poster").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static IMG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Extract diary films from a listing page, in page order.
///
/// Posters without a usable title (no `img`, no `alt`, or blank alt text) are
/// skipped with a warning. A poster without a link keeps its title and gets
/// no URL.
pub fn parse_diary_html(html: &str, origin: &str) -> Vec<FilmEntry> {
    let document = Html::parse_document(html);

    document
        .select(&POSTER_SEL)
        .enumerate()
        .filter_map(|(i, poster)| {
            let entry = parse_poster(poster, origin);
            if entry.is_none() {
                warn!("Skipping poster #{} with no title", i + 1);
            }
            entry
        })
        .collect()
}

fn parse_poster(poster: ElementRef, origin: &str) -> Option<FilmEntry> {
    let title = poster
        .select(&IMG_SEL)
        .next()
        .and_then(|img| img.value().attr("alt"))
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();

    let letterboxd_url = poster
        .select(&ANCHOR_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(|href| absolute_url(origin, href));

    Some(FilmEntry {
        title,
        letterboxd_url,
    })
}

fn absolute_url(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://letterboxd.com";

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn diary_fixture_in_page_order() {
        let films = parse_diary_html(&fixture("diary"), ORIGIN);
        let titles: Vec<&str> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Perfect Days", "Past Lives", "Aftersun", "The Zone of Interest"]
        );
        assert_eq!(
            films[0].letterboxd_url.as_deref(),
            Some("https://letterboxd.com/film/perfect-days-2023/")
        );
    }

    #[test]
    fn diary_fixture_blank_titles_skipped() {
        let films = parse_diary_html(&fixture("diary"), ORIGIN);
        assert!(films.iter().all(|f| !f.title.trim().is_empty()));
        assert_eq!(films.len(), 4);
    }

    #[test]
    fn diary_fixture_missing_anchor_is_null() {
        let films = parse_diary_html(&fixture("diary"), ORIGIN);
        let zone = films
            .iter()
            .find(|f| f.title == "The Zone of Interest")
            .unwrap();
        assert_eq!(zone.letterboxd_url, None);
    }

    #[test]
    fn empty_fixture_yields_nothing() {
        assert!(parse_diary_html(&fixture("empty"), ORIGIN).is_empty());
    }

    #[test]
    fn posters_outside_listing_ignored() {
        let html = r#"<div class="film-poster"><a href="/film/x/"></a><img alt="Stray"></div>
            <ul class="poster-list"><li><div class="film-poster"><a href="/film/y/"></a><img alt="Kept"></div></li></ul>"#;
        let films = parse_diary_html(html, ORIGIN);
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].title, "Kept");
    }

    #[test]
    fn title_trimmed() {
        let html = r#"<ul class="poster-list"><li class="film-poster"><img alt="  Heat
            "></li></ul>"#;
        let films = parse_diary_html(html, ORIGIN);
        assert_eq!(films[0].title, "Heat");
    }

    #[test]
    fn empty_href_is_null() {
        let html = r#"<ul class="poster-list"><li class="film-poster"><a href=""></a><img alt="Heat"></li></ul>"#;
        let films = parse_diary_html(html, ORIGIN);
        assert_eq!(films[0].letterboxd_url, None);
    }

    #[test]
    fn absolute_url_forms() {
        assert_eq!(
            absolute_url(ORIGIN, "/film/heat/"),
            "https://letterboxd.com/film/heat/"
        );
        assert_eq!(
            absolute_url(ORIGIN, "film/heat/"),
            "https://letterboxd.com/film/heat/"
        );
        assert_eq!(
            absolute_url(ORIGIN, "https://boxd.it/abc"),
            "https://boxd.it/abc"
        );
    }
}
