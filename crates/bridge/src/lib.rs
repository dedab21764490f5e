//! Discord bridge library.
//!
//! Serves the signed interactions webhook and the endpoints the web
//! application uses to relay problem events to Discord.

pub mod clients;
pub mod config;
pub mod deploy;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod settings_cache;
pub mod signature;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::clients::DiscordClient;
use crate::config::{BridgeConfig, DiscordConfig};
use crate::infra::Database;
use crate::repository::PgStore;
use crate::routes::create_router;
use crate::signature::SignatureVerifier;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: BridgeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let verifier = SignatureVerifier::from_hex(&config.public_key)?;

    // Create Discord client
    let discord = Arc::new(DiscordClient::new(&config.discord)?);

    // Connect to the database
    let db = Database::connect(&config.database).await?;
    let store = Arc::new(PgStore::new(db.get_connection()));

    // Build address before config moves into state
    let addr: SocketAddr = config.server_addr().parse()?;

    // Create app state
    let state = AppState::new(discord, store, verifier, config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!("Bridge listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Register commands and role-connection metadata, then exit.
pub async fn run_deploy(
    config: DiscordConfig,
    guild: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let guild_id = if guild {
        Some(
            config
                .guild_id
                .clone()
                .ok_or_else(|| common::ConfigError::Missing("DISCORD_GUILD_ID".to_string()))?,
        )
    } else {
        None
    };

    let discord = DiscordClient::new(&config)?;
    let summary = deploy::deploy(&discord, guild_id.as_deref()).await?;

    info!(
        "Deploy complete: {} commands, {} metadata records",
        summary.commands, summary.metadata
    );
    Ok(())
}
