use std::path::PathBuf;

use crate::throttle::Throttle;

pub const LETTERBOXD_ORIGIN: &str = "https://letterboxd.com";
pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub const DEFAULT_USERNAME: &str = "vkworkofficial";
pub const DEFAULT_OUT_DIR: &str = "public";
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Everything a run needs to know; built once in `main` and passed down.
#[derive(Clone)]
pub struct Config {
    pub username: String,
    /// Diary listing page to scrape. Only the first page is ever requested.
    pub page: u32,
    pub out_dir: PathBuf,
    pub site_origin: String,
    pub api_base: String,
    pub image_base: String,
    pub api_key: Option<String>,
    pub throttle: Throttle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            page: 1,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            site_origin: LETTERBOXD_ORIGIN.to_string(),
            api_base: TMDB_API_BASE.to_string(),
            image_base: TMDB_IMAGE_BASE.to_string(),
            api_key: None,
            throttle: Throttle::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl Config {
    pub fn diary_url(&self) -> String {
        format!(
            "{}/{}/films/page/{}/",
            self.site_origin, self.username, self.page
        )
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}-movies.json", self.username))
    }
}
