//! REST client for the Discord HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{
    Channel, CommandDefinition, ForumTag, InteractionCallbackData, RoleConnectionMetadata,
    WebhookMessage, BOT_TOKEN_PREFIX,
};

use crate::config::DiscordConfig;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Discord operations used by the bridge.
///
/// Non-2xx responses surface as [`AppError::Upstream`] carrying Discord's
/// status and body unchanged.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Overwrite the global application commands. Returns the number Discord accepted.
    async fn register_global_commands(&self, commands: &[CommandDefinition]) -> AppResult<usize>;

    /// Overwrite the application commands of a single guild.
    async fn register_guild_commands(
        &self,
        guild_id: &str,
        commands: &[CommandDefinition],
    ) -> AppResult<usize>;

    /// Overwrite the linked-roles metadata records.
    async fn register_role_connection_metadata(
        &self,
        records: &[RoleConnectionMetadata],
    ) -> AppResult<usize>;

    /// Fetch a channel, including forum tags.
    async fn get_channel(&self, channel_id: &str) -> AppResult<Channel>;

    /// Replace the available tags of a forum channel.
    async fn set_forum_tags(&self, channel_id: &str, tags: &[ForumTag]) -> AppResult<Channel>;

    /// Mark a thread as not archived.
    async fn unarchive_thread(&self, thread_id: &str) -> AppResult<()>;

    /// Edit a message. The edit body is forwarded as-is.
    async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        edit: &Value,
    ) -> AppResult<Value>;

    /// Post a message through an incoming webhook.
    async fn execute_webhook(
        &self,
        webhook_id: &str,
        webhook_token: &str,
        message: &WebhookMessage,
    ) -> AppResult<()>;

    /// Replace the original (usually deferred) response of an interaction.
    async fn edit_original_response(
        &self,
        interaction_token: &str,
        data: &InteractionCallbackData,
    ) -> AppResult<()>;
}

/// reqwest-backed [`DiscordApi`].
pub struct DiscordClient {
    http: reqwest::Client,
    base_url: String,
    application_id: String,
    authorization: String,
}

impl DiscordClient {
    pub fn new(config: &DiscordConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                "DiscordBot (",
                env!("CARGO_PKG_NAME"),
                ", ",
                env!("CARGO_PKG_VERSION"),
                ")"
            ))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .timeout(Duration::from_millis(config.http.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.http.base_url.trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            authorization: format!("{}{}", BOT_TOKEN_PREFIX, config.bot_token()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, &self.authorization)
    }

    async fn put_list<T: Serialize + Sync>(&self, path: &str, items: &[T]) -> AppResult<usize> {
        let request = self.authorized(self.http.put(self.url(path))).json(items);
        let accepted: Vec<Value> = send_json(request).await?;
        Ok(accepted.len())
    }
}

/// Send a request and reject non-2xx responses.
async fn send(request: RequestBuilder) -> AppResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Discord responded with {}: {}", status, body);
    Err(AppError::upstream(status.as_u16(), body))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> AppResult<T> {
    Ok(send(request).await?.json::<T>().await?)
}

#[async_trait]
impl DiscordApi for DiscordClient {
    async fn register_global_commands(&self, commands: &[CommandDefinition]) -> AppResult<usize> {
        debug!("Registering {} global commands", commands.len());
        let path = format!("applications/{}/commands", self.application_id);
        self.put_list(&path, commands).await
    }

    async fn register_guild_commands(
        &self,
        guild_id: &str,
        commands: &[CommandDefinition],
    ) -> AppResult<usize> {
        debug!("Registering {} commands in guild {}", commands.len(), guild_id);
        let path = format!(
            "applications/{}/guilds/{}/commands",
            self.application_id, guild_id
        );
        self.put_list(&path, commands).await
    }

    async fn register_role_connection_metadata(
        &self,
        records: &[RoleConnectionMetadata],
    ) -> AppResult<usize> {
        let path = format!(
            "applications/{}/role-connections/metadata",
            self.application_id
        );
        self.put_list(&path, records).await
    }

    async fn get_channel(&self, channel_id: &str) -> AppResult<Channel> {
        let request = self.authorized(self.http.get(self.url(&format!("channels/{}", channel_id))));
        send_json(request).await
    }

    async fn set_forum_tags(&self, channel_id: &str, tags: &[ForumTag]) -> AppResult<Channel> {
        let request = self
            .authorized(self.http.patch(self.url(&format!("channels/{}", channel_id))))
            .json(&json!({ "available_tags": tags }));
        send_json(request).await
    }

    async fn unarchive_thread(&self, thread_id: &str) -> AppResult<()> {
        let request = self
            .authorized(self.http.patch(self.url(&format!("channels/{}", thread_id))))
            .json(&json!({ "archived": false }));
        send(request).await?;
        Ok(())
    }

    async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        edit: &Value,
    ) -> AppResult<Value> {
        let path = format!("channels/{}/messages/{}", channel_id, message_id);
        let request = self.authorized(self.http.patch(self.url(&path))).json(edit);
        send_json(request).await
    }

    async fn execute_webhook(
        &self,
        webhook_id: &str,
        webhook_token: &str,
        message: &WebhookMessage,
    ) -> AppResult<()> {
        // Webhook endpoints authenticate by token in the path.
        let path = format!("webhooks/{}/{}", webhook_id, webhook_token);
        send(self.http.post(self.url(&path)).json(message)).await?;
        Ok(())
    }

    async fn edit_original_response(
        &self,
        interaction_token: &str,
        data: &InteractionCallbackData,
    ) -> AppResult<()> {
        let path = format!(
            "webhooks/{}/{}/messages/@original",
            self.application_id, interaction_token
        );
        send(self.http.patch(self.url(&path)).json(data)).await?;
        Ok(())
    }
}
