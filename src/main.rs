use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use activity_feed_server::collaborators::{
    build_http_client, HttpAccountDirectory, HttpFriendDirectory, HttpPlaylistCatalog,
    HttpSharingLedger,
};
use activity_feed_server::feed::FeedAggregator;
use activity_feed_server::server::{metrics, run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Base URL of the accounts service.
    #[clap(long, default_value = "http://accounts:5000")]
    pub accounts_url: String,

    /// Base URL of the friends service.
    #[clap(long, default_value = "http://friends:5000")]
    pub friends_url: String,

    /// Base URL of the playlists service.
    #[clap(long, default_value = "http://playlists:5000")]
    pub playlists_url: String,

    /// Base URL of the playlist sharing service.
    #[clap(long, default_value = "http://playlists_sharing:5000")]
    pub sharing_url: String,

    /// Timeout in seconds for each collaborator request.
    #[clap(long, default_value_t = 3)]
    pub collaborator_timeout_sec: u64,

    /// Events returned when the caller does not specify an amount.
    #[clap(long, default_value_t = 10)]
    pub default_feed_amount: usize,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!("Initializing metrics...");
    metrics::init_metrics();

    let http_client = build_http_client(Duration::from_secs(cli_args.collaborator_timeout_sec))
        .context("Failed to create collaborator HTTP client")?;

    let accounts = Arc::new(HttpAccountDirectory::new(
        http_client.clone(),
        &cli_args.accounts_url,
    ));
    let aggregator = Arc::new(FeedAggregator::new(
        Arc::new(HttpFriendDirectory::new(
            http_client.clone(),
            &cli_args.friends_url,
        )),
        Arc::new(HttpPlaylistCatalog::new(
            http_client.clone(),
            &cli_args.playlists_url,
        )),
        Arc::new(HttpSharingLedger::new(http_client, &cli_args.sharing_url)),
    ));

    info!(
        "Aggregating from accounts={} friends={} playlists={} sharing={}",
        cli_args.accounts_url, cli_args.friends_url, cli_args.playlists_url, cli_args.sharing_url
    );

    let config = ServerConfig {
        requests_logging_level: cli_args.logging_level,
        port: cli_args.port,
        default_feed_amount: cli_args.default_feed_amount,
    };

    run_server(config, accounts, aggregator).await
}
