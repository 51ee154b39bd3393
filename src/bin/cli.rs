//! santiebeati crawler CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use santiebeati::{
    error::Result,
    models::Config,
    pipeline,
    services::{PageFetcher, SaintCrawler},
    storage::CacheStore,
    utils::http,
};

/// santiebeati - Directory crawler for santiebeati.it
#[derive(Parser, Debug)]
#[command(
    name = "santiebeati",
    version,
    about = "Crawls the santiebeati.it directory of saints and blesseds"
)]
struct Cli {
    /// Cache directory; config is read from {dir}/config.toml when present
    #[arg(short, long, default_value = "db")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl all name-index partitions, A through Z
    Names,

    /// Crawl all calendar partitions, every month/day pair
    Calendar,

    /// Build the feast-day calendar index from the name partitions
    Index,

    /// Run full pipeline: names, calendar, index
    Pipeline,

    /// Validate the configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(cli.storage_dir.join("config.toml"));

    let store = CacheStore::new(&cli.storage_dir);
    let client = http::create_client(&config.crawler)?;
    let crawler = SaintCrawler::new(&config, PageFetcher::new(client))?;

    match cli.command {
        Command::Names => {
            let saints = pipeline::run_names(&config, &store, &crawler).await?;
            log::info!("Name crawl complete: {} entries", saints.len());
        }

        Command::Calendar => {
            pipeline::run_calendar(&config, &store, &crawler).await?;
            log::info!("Calendar crawl complete");
        }

        Command::Index => {
            let index = pipeline::run_index(&config, &store, &crawler).await?;
            log::info!("Calendar index written: {} days", index.len());
        }

        Command::Pipeline => {
            log::info!("Step 1/3: crawling name partitions...");
            pipeline::run_names(&config, &store, &crawler).await?;

            log::info!("Step 2/3: crawling calendar partitions...");
            pipeline::run_calendar(&config, &store, &crawler).await?;

            log::info!("Step 3/3: building calendar index...");
            let index = pipeline::run_index(&config, &store, &crawler).await?;
            log::info!("Pipeline complete: {} days indexed", index.len());
        }

        Command::Validate => pipeline::run_validate(&config)?,
    }

    log::info!("Done!");

    Ok(())
}
