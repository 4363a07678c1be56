mod config;
mod diary;
mod enrich;
mod fetch;
mod models;
mod output;
mod parser;
mod pipeline;
mod throttle;
mod tmdb;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, warn};

use config::{Config, DEFAULT_DELAY_MS, DEFAULT_OUT_DIR, DEFAULT_USERNAME};
use diary::DiaryScraper;
use fetch::Fetcher;
use throttle::Throttle;
use tmdb::TmdbClient;

#[derive(Parser)]
#[command(
    name = "letterboxd_posters",
    about = "Scrape a Letterboxd diary and attach TMDb posters"
)]
struct Cli {
    /// Letterboxd username whose diary is scraped
    #[arg(short, long, default_value = DEFAULT_USERNAME)]
    username: String,
    /// Directory the `<username>-movies.json` file is written to
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
    /// Pause before each outbound request, in milliseconds (0 disables)
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,
    /// TMDb API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            username: self.username,
            out_dir: self.out_dir,
            api_key: self.api_key.filter(|k| !k.is_empty()),
            throttle: Throttle::from_millis(self.delay_ms),
            ..Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let config = Cli::parse().into_config();
    if config.api_key.is_none() {
        warn!("TMDB_API_KEY is not set; poster lookups will fail");
    }

    let fetcher = Fetcher::new(config.throttle);
    let diary = DiaryScraper::new(&fetcher, &config);
    let search = TmdbClient::new(&fetcher, &config);

    match pipeline::run(&config, &diary, &search).await {
        Ok(summary) => {
            let with_poster = summary
                .films
                .iter()
                .filter(|f| f.poster_url.is_some())
                .count();
            println!(
                "Wrote {} films ({} with posters) to {} in {:.1}s",
                summary.films.len(),
                with_poster,
                summary.path.display(),
                t0.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
