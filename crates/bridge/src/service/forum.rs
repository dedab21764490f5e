//! Forum tag synchronisation.

use tracing::info;

use common::AppResult;
use domain::forum::{merge_tags, select_tag_ids};

use crate::clients::DiscordApi;

/// Make sure every name in `desired` exists as a tag on the forum channel
/// and return the ids to apply to a post, in channel order.
pub async fn sync_forum_tags(
    discord: &dyn DiscordApi,
    channel_id: &str,
    desired: &[String],
) -> AppResult<Vec<String>> {
    let channel = discord.get_channel(channel_id).await?;
    let mut available = channel.available_tags;

    if let Some(merged) = merge_tags(&available, desired) {
        info!(
            "Adding {} tags to forum {}",
            merged.len() - available.len(),
            channel_id
        );
        available = discord.set_forum_tags(channel_id, &merged).await?.available_tags;
    }

    Ok(select_tag_ids(&available, desired))
}
