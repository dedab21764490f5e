//! Bridge configuration loaded from environment variables.

use common::{optional_env, parse_env_or, require_env, ConfigError, DatabaseConfig, HttpClientConfig};
use domain::DISCORD_API_BASE_URL;

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default timeout for Discord REST calls
pub const DEFAULT_DISCORD_TIMEOUT_SECONDS: u64 = 15;

/// Discord application credentials and REST settings.
#[derive(Clone)]
pub struct DiscordConfig {
    /// Application (client) id
    pub application_id: String,
    bot_token: String,
    /// Guild used for development command registration
    pub guild_id: Option<String>,
    pub http: HttpClientConfig,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("application_id", &self.application_id)
            .field("bot_token", &"[REDACTED]")
            .field("guild_id", &self.guild_id)
            .field("http", &self.http)
            .finish()
    }
}

impl DiscordConfig {
    pub fn new(application_id: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            bot_token: bot_token.into(),
            guild_id: None,
            http: HttpClientConfig::default(),
        }
    }

    /// Load Discord settings from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_seconds: u64 =
            parse_env_or("DISCORD_HTTP_TIMEOUT_SECONDS", DEFAULT_DISCORD_TIMEOUT_SECONDS)?;

        Ok(Self {
            application_id: require_env("DISCORD_APPLICATION_ID")?,
            bot_token: require_env("DISCORD_BOT_TOKEN")?,
            guild_id: optional_env("DISCORD_GUILD_ID"),
            http: HttpClientConfig {
                base_url: optional_env("DISCORD_API_BASE_URL")
                    .unwrap_or_else(|| DISCORD_API_BASE_URL.to_string()),
                request_timeout_ms: seconds_to_millis(
                    "DISCORD_HTTP_TIMEOUT_SECONDS",
                    timeout_seconds,
                )?,
                ..HttpClientConfig::default()
            },
        })
    }

    /// Bot token for the `Authorization` header.
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
}

fn seconds_to_millis(name: &str, seconds: u64) -> Result<u64, ConfigError> {
    seconds
        .checked_mul(1000)
        .ok_or_else(|| ConfigError::invalid(name, format!("{} seconds is too large", seconds)))
}

/// Incoming webhook that problem updates are relayed to.
#[derive(Clone)]
pub struct WebhookConfig {
    pub id: String,
    token: String,
}

impl std::fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("id", &self.id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl WebhookConfig {
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Full service configuration.
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub discord: DiscordConfig,
    /// Hex-encoded Ed25519 key from the Discord developer portal
    pub public_key: String,
    pub webhook: Option<WebhookConfig>,
    /// Public URL of the web application, for resolving relative logos
    pub public_base_url: Option<String>,
}

impl BridgeConfig {
    pub fn new(discord: DiscordConfig, public_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            database: DatabaseConfig::default(),
            discord,
            public_key: public_key.into(),
            webhook: None,
            public_base_url: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let webhook = match (
            optional_env("DISCORD_WEBHOOK_ID"),
            optional_env("DISCORD_WEBHOOK_TOKEN"),
        ) {
            (Some(id), Some(token)) => Some(WebhookConfig::new(id, token)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("DISCORD_WEBHOOK_TOKEN".into())),
            (None, Some(_)) => return Err(ConfigError::Missing("DISCORD_WEBHOOK_ID".into())),
        };

        Ok(Self {
            host: optional_env("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: parse_env_or("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            database: DatabaseConfig {
                url: require_env("DATABASE_URL")?,
                max_connections: parse_env_or("DATABASE_MAX_CONNECTIONS", 10)?,
                ..DatabaseConfig::default()
            },
            discord: DiscordConfig::from_env()?,
            public_key: require_env("DISCORD_PUBLIC_KEY")?,
            webhook,
            public_base_url: optional_env("PUBLIC_BASE_URL"),
        })
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = BridgeConfig::new(DiscordConfig::new("123", "super-secret-token"), "ab");
        config.webhook = Some(WebhookConfig::new("456", "webhook-secret"));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-token"));
        assert!(!debug.contains("webhook-secret"));
        assert!(debug.contains("123"));
    }

    #[test]
    fn test_timeout_conversion_rejects_overflow() {
        assert_eq!(seconds_to_millis("T", 30).unwrap(), 30_000);
        assert!(matches!(
            seconds_to_millis("T", u64::MAX),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_server_addr() {
        let config = BridgeConfig::new(DiscordConfig::new("1", "t"), "ab");
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }
}
