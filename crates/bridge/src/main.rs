//! Discord bridge - interactions webhook and event relay.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bridge_lib::config::{BridgeConfig, DiscordConfig};

#[derive(Parser, Debug)]
#[command(name = "bridge")]
#[command(author, version, about = "Discord bridge for the problem writing platform", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
        port: u16,
    },
    /// Register slash commands and linked-roles metadata with Discord
    Deploy {
        /// Register commands in DISCORD_GUILD_ID instead of globally
        #[arg(short, long)]
        guild: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve { host, port } => match BridgeConfig::from_env() {
            Ok(mut config) => {
                config.host = host;
                config.port = port;
                tracing::debug!("Configuration loaded: {:?}", config);
                bridge_lib::run_server(config).await
            }
            Err(e) => Err(e.into()),
        },
        Commands::Deploy { guild } => match DiscordConfig::from_env() {
            Ok(config) => bridge_lib::run_deploy(config, guild).await,
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
