//! Problem thread maintenance.

use serde_json::Value;
use tracing::debug;

use common::AppResult;

use crate::clients::DiscordApi;

/// Reopen a forum thread and edit its starter message.
///
/// A forum post's starter message shares the thread's id, so `thread_id`
/// addresses both the channel and the message.
pub async fn refresh_thread(
    discord: &dyn DiscordApi,
    thread_id: &str,
    edit: &Value,
) -> AppResult<Value> {
    discord.unarchive_thread(thread_id).await?;
    debug!("Thread {} unarchived", thread_id);

    discord.edit_message(thread_id, thread_id, edit).await
}
