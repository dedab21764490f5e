//! Forum channel tag synchronisation.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_FORUM_TAGS;

/// A tag available on a forum channel. Tags not yet created have no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub moderated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_name: Option<String>,
}

impl ForumTag {
    /// New, unmoderated tag.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            moderated: false,
            emoji_id: None,
            emoji_name: None,
        }
    }
}

/// The parts of a channel object the bridge reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub available_tags: Vec<ForumTag>,
}

/// Desired tag names the channel does not have yet, first occurrence only.
pub fn missing_tags<'a>(available: &[ForumTag], desired: &'a [String]) -> Vec<&'a str> {
    let mut missing: Vec<&str> = Vec::new();
    for name in desired {
        let exists = available.iter().any(|tag| &tag.name == name);
        if !exists && !missing.contains(&name.as_str()) {
            missing.push(name);
        }
    }
    missing
}

/// Existing tags followed by new ones for every missing name.
///
/// Returns `None` when nothing is missing and the channel needs no update.
pub fn merge_tags(available: &[ForumTag], desired: &[String]) -> Option<Vec<ForumTag>> {
    let missing = missing_tags(available, desired);
    if missing.is_empty() {
        return None;
    }

    let mut merged = available.to_vec();
    merged.extend(missing.into_iter().map(ForumTag::named));
    Some(merged)
}

/// Ids of the desired tags, in channel order, capped at Discord's limit.
pub fn select_tag_ids(available: &[ForumTag], desired: &[String]) -> Vec<String> {
    available
        .iter()
        .filter(|tag| desired.contains(&tag.name))
        .filter_map(|tag| tag.id.clone())
        .take(MAX_FORUM_TAGS)
        .collect()
}
