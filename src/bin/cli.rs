//! pokefeed CLI
//!
//! Local entry point for browsing the feed and managing favorites
//! from a terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pokefeed::{
    error::Result,
    models::{Config, Creature},
    services::{CreatureSource, FeedController, PokeClient},
    storage::{FavoritesStore, LocalFavoritesStore},
};

/// pokefeed - Creature feed browser
#[derive(Parser, Debug)]
#[command(name = "pokefeed", version, about = "Creature feed over the PokeAPI")]
struct Cli {
    /// Path to storage directory containing config and favorites
    #[arg(short, long, default_value = "data")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the next batches of the feed
    Feed {
        /// Number of batches to load
        #[arg(long, default_value_t = 1)]
        batches: usize,
    },

    /// List persisted favorites with their records
    Favorites,

    /// Toggle a creature id in the favorites set
    Toggle {
        /// Creature id to toggle
        id: u32,
    },

    /// Validate configuration files
    Validate,

    /// Show storage and favorites info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// One line per creature, favorite-marked.
fn print_creature(creature: &Creature, favorite: bool) {
    let marker = if favorite { "*" } else { " " };
    println!(
        "{} #{:<4} {:<12} {:<8} hp:{:<3} atk:{:<3} def:{:<3} {}",
        marker,
        creature.id,
        creature.name,
        creature.primary_type,
        creature.hp,
        creature.attack,
        creature.defense,
        creature.image_url
    );
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);

    let favorites_path = cli.storage_dir.join(&config.storage.favorites_file);
    let store = LocalFavoritesStore::new(&favorites_path);

    match cli.command {
        Command::Feed { batches } => {
            let client = PokeClient::new(&config.api)?;
            let mut feed = FeedController::new(client, store, config.feed.clone());
            feed.init().await?;

            for _ in 0..batches {
                feed.load_more().await;
            }

            for creature in feed.creatures() {
                let favorite = feed.is_favorite(creature.id);
                print_creature(creature, favorite);
            }
            log::info!(
                "Loaded {} creature(s), cursor at {}",
                feed.creatures().len(),
                feed.cursor()
            );
        }

        Command::Favorites => {
            let client = PokeClient::new(&config.api)?;
            let mut ids: Vec<u32> = store.load().await?.into_iter().collect();
            ids.sort_unstable();

            if ids.is_empty() {
                log::info!("No favorites yet.");
            }
            for id in ids {
                match client.fetch_one(id).await.into_creature() {
                    Some(creature) => print_creature(&creature, true),
                    None => log::warn!("Favorite {} has no record at the source", id),
                }
            }
        }

        Command::Toggle { id } => {
            let client = PokeClient::new(&config.api)?;
            let mut feed = FeedController::new(client, store, config.feed.clone());
            feed.init().await?;

            let now_favorite = feed.toggle_favorite(id).await;
            log::info!(
                "Creature {} is {} a favorite",
                id,
                if now_favorite { "now" } else { "no longer" }
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());
            log::info!(
                "Favorites slot: {} ({})",
                favorites_path.display(),
                if favorites_path.exists() {
                    "exists"
                } else {
                    "not found"
                }
            );

            let favorites = store.load().await?;
            log::info!("{} favorite(s) persisted", favorites.len());
        }
    }

    Ok(())
}
