use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brawl_stats::api::state::AppState;
use brawl_stats::config::AppConfig;
use brawl_stats::fetch::{BrawlStarsClient, MatchSource, RankingQuery};
use brawl_stats::models::{ItemsEnvelope, RawBattleItem};
use brawl_stats::normalize::AssetUrlBuilder;
use brawl_stats::{canonical_player_tag, StatisticBuilder};

#[derive(Parser)]
#[command(name = "brawl-stats")]
#[command(about = "Brawl Stars battle-log statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Fetch a player's battle log and print the statistic as JSON
    Statistic {
        /// Player tag, with or without the leading '#'
        tag: String,
    },

    /// Print the brawler roster
    Brawlers,

    /// Print a player ranking
    Players {
        /// Country code (default: global)
        #[arg(long)]
        country_code: Option<String>,

        /// Rank players by a single brawler
        #[arg(long)]
        brawler_id: Option<String>,
    },

    /// Summarize a saved battle-log JSON file without network access
    Summarize {
        /// File holding `{"items": [...]}` or a bare array of battles
        path: PathBuf,

        /// Tracked player's tag
        #[arg(long)]
        tag: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    // Initialize tracing
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting brawl-stats v{}", env!("CARGO_PKG_VERSION"));

    let statistics = StatisticBuilder::new(
        AssetUrlBuilder::new(config.display.cdn_base.clone()),
        config.display.locale,
    );

    match cli.command {
        Commands::Serve { host, port } => {
            let source = BrawlStarsClient::from_config(&config.remote)
                .context("Failed to create remote client")?;
            let state = AppState::new(
                Arc::new(source),
                statistics,
                config.server.cors_origin.clone(),
            );
            let app = brawl_stats::api::build_router(state);

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Statistic { tag } => {
            let Some(tag) = canonical_player_tag(&tag) else {
                bail!("Player tag must not be empty");
            };
            let source = BrawlStarsClient::from_config(&config.remote)
                .context("Failed to create remote client")?;
            let items = source
                .battlelog(&tag)
                .await
                .with_context(|| format!("Failed to fetch battle log for {}", tag))?;
            print_json(&statistics.build(&items, &tag))?;
        }
        Commands::Brawlers => {
            let source = BrawlStarsClient::from_config(&config.remote)
                .context("Failed to create remote client")?;
            let raw = source.brawlers().await.context("Failed to fetch brawlers")?;
            print_json(&statistics.roster(raw))?;
        }
        Commands::Players {
            country_code,
            brawler_id,
        } => {
            let source = BrawlStarsClient::from_config(&config.remote)
                .context("Failed to create remote client")?;
            let query = RankingQuery {
                country_code,
                brawler_id,
            };
            let players = source
                .rankings(&query)
                .await
                .context("Failed to fetch ranking")?;
            print_json(&players)?;
        }
        Commands::Summarize { path, tag } => {
            let items = read_battlelog_file(&path)?;
            let items = if config.remote.ranked_only {
                brawl_stats::fetch::retain_ranked(items)
            } else {
                items
            };
            tracing::info!("Summarizing {} battles from {}", items.len(), path.display());
            print_json(&statistics.build(&items, &tag))?;
        }
    }

    Ok(())
}

/// Read a battle log saved from the remote service.
fn read_battlelog_file(path: &PathBuf) -> Result<Vec<RawBattleItem>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse battle list in {}", path.display()));
    }

    let envelope: ItemsEnvelope<RawBattleItem> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse battle log in {}", path.display()))?;
    envelope
        .items
        .with_context(|| format!("No items in {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
