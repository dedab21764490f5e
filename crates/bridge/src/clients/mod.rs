//! Clients for external services.

mod discord_client;

pub use discord_client::{DiscordApi, DiscordClient};

#[cfg(any(test, feature = "test-utils"))]
pub use discord_client::MockDiscordApi;
