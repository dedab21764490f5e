//! Relaying problem updates to the announcements webhook.

use tracing::info;

use common::{AppError, AppResult, ConfigError};
use domain::{ProblemUpdate, Settings, WebhookMessage, WEBHOOK_USERNAME};

use crate::clients::DiscordApi;
use crate::config::WebhookConfig;

/// Build the webhook message announcing `update`.
pub fn announcement(
    update: &ProblemUpdate,
    settings: &Settings,
    public_base_url: Option<&str>,
) -> WebhookMessage {
    WebhookMessage {
        content: update.announcement(),
        username: Some(WEBHOOK_USERNAME.to_string()),
        avatar_url: Some(settings.logo_url(public_base_url)),
    }
}

/// Post the announcement through the configured webhook.
pub async fn announce_update(
    discord: &dyn DiscordApi,
    webhook: Option<&WebhookConfig>,
    message: &WebhookMessage,
) -> AppResult<()> {
    let webhook = webhook.ok_or_else(|| {
        AppError::Config(ConfigError::Missing("DISCORD_WEBHOOK_ID".to_string()))
    })?;

    discord
        .execute_webhook(&webhook.id, webhook.token(), message)
        .await?;
    info!("Announced: {}", message.content);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockDiscordApi;
    use serde_json::json;

    fn update() -> ProblemUpdate {
        ProblemUpdate {
            updater: "alice".to_string(),
            update: "edited".to_string(),
            id: json!(12),
        }
    }

    #[test]
    fn test_announcement_uses_logo_as_avatar() {
        let settings = Settings {
            logo: "/brand.png".to_string(),
            title: String::new(),
        };

        let message = announcement(&update(), &settings, Some("https://compose.example.com"));
        assert_eq!(message.content, "alice edited problem 12");
        assert_eq!(message.username.as_deref(), Some("Problem Writing Platform"));
        assert_eq!(
            message.avatar_url.as_deref(),
            Some("https://compose.example.com/brand.png")
        );
    }

    #[tokio::test]
    async fn test_announce_posts_to_configured_webhook() {
        let mut discord = MockDiscordApi::new();
        discord
            .expect_execute_webhook()
            .withf(|id, token, message| {
                id == "500" && token == "hook-token" && message.content == "alice edited problem 12"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let webhook = WebhookConfig::new("500", "hook-token");
        let message = announcement(&update(), &Settings::default(), None);

        announce_update(&discord, Some(&webhook), &message)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_announce_without_webhook_is_config_error() {
        let mut discord = MockDiscordApi::new();
        discord.expect_execute_webhook().never();

        let message = announcement(&update(), &Settings::default(), None);
        let err = announce_update(&discord, None, &message).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
