//! # newsdesk
//!
//! A command-line client for the Bing News Search API. Three
//! subcommands cover the API's request shapes:
//!
//! - `phrase`: free-text search (`newsdesk phrase -p election`)
//! - `cat`: browse a category for a market (`newsdesk cat -c Sports -m en-US`)
//! - `trend`: trending topics for a market (`newsdesk trend`)
//!
//! Results print as a bordered table with word-wrapped Title and
//! Description columns and shortened URLs. Responses are cached on
//! disk for five minutes, so repeating a query within that window
//! skips the network.
//!
//! Configuration comes from `BING_SEARCH_KEY` and
//! `BING_SEARCH_ENDPOINT`, read from the environment or a `.env`
//! file. Any failure prints a single red `Error:` line and exits
//! nonzero; HTTP-level errors carry the status code in that line.

use std::process::ExitCode;

use chrono::Duration;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cache;
mod cli;
mod config;
mod error;
mod models;
mod render;
mod shorten;

use api::NewsClient;
use cache::HttpCache;
use cli::{Cli, Command, prompt_search_phrase};
use config::{CACHE_TTL_SECS, Config, default_cache_dir};
use error::Error;
use render::render_results;
use shorten::IsGdShortener;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();

    // A .env file is optional; real environment variables win.
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    debug!(?args, "parsed CLI arguments");

    match run(args).await {
        Ok(()) => {
            let elapsed = start_time.elapsed();
            info!(?elapsed, "execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{}", format!("Error: {e}").red());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<(), Error> {
    // Configuration problems stop us here, before any network call.
    let config = Config::from_env()?;

    let cache = HttpCache::open(default_cache_dir(), Duration::seconds(CACHE_TTL_SECS))?;
    let purged = cache.purge_expired()?;
    debug!(purged, "response cache ready");

    let client = NewsClient::new(config, cache);
    let shortener = IsGdShortener::new();

    let response = match args.command {
        Command::Phrase { search_phrase } => {
            let phrase = match search_phrase {
                Some(phrase) => phrase,
                None => prompt_search_phrase()?,
            };
            println!("Searching for {phrase}...");
            client.search_phrase(&phrase).await?
        }
        Command::Cat { category, market } => {
            println!("Searching for {category} in {market}...");
            client.search_category(market, category).await?
        }
        Command::Trend { market } => {
            println!("Searching for trending topics in {market}...");
            client.trending(market).await?
        }
    };

    let table = render_results(response, &shortener).await?;
    println!("{table}");
    Ok(())
}
