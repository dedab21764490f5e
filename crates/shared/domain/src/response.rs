//! Interaction responses returned to Discord.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::constants::FLAG_EPHEMERAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionResponseType {
    Pong,
    ChannelMessageWithSource,
    DeferredChannelMessageWithSource,
    DeferredUpdateMessage,
    UpdateMessage,
    Modal,
    Other(u8),
}

impl From<u8> for InteractionResponseType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionResponseType::Pong,
            4 => InteractionResponseType::ChannelMessageWithSource,
            5 => InteractionResponseType::DeferredChannelMessageWithSource,
            6 => InteractionResponseType::DeferredUpdateMessage,
            7 => InteractionResponseType::UpdateMessage,
            9 => InteractionResponseType::Modal,
            other => InteractionResponseType::Other(other),
        }
    }
}

impl From<InteractionResponseType> for u8 {
    fn from(kind: InteractionResponseType) -> Self {
        match kind {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
            InteractionResponseType::DeferredChannelMessageWithSource => 5,
            InteractionResponseType::DeferredUpdateMessage => 6,
            InteractionResponseType::UpdateMessage => 7,
            InteractionResponseType::Modal => 9,
            InteractionResponseType::Other(other) => other,
        }
    }
}

/// Message or modal payload of an interaction response. Also used as the
/// body when editing the original response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionCallbackData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    /// Modal id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Modal title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl InteractionCallbackData {
    /// Plain message content.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Message only the invoking user can see.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            flags: Some(FLAG_EPHEMERAL),
            ..Self::text(content)
        }
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|f| f & FLAG_EPHEMERAL != 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

impl InteractionResponse {
    /// Acknowledge a PING.
    pub fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    pub fn message(data: InteractionCallbackData) -> Self {
        Self {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(data),
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::message(InteractionCallbackData::ephemeral(content))
    }

    /// "Thinking..." placeholder, visible only to the invoker. The real
    /// reply is sent later by editing `@original`.
    pub fn deferred_ephemeral() -> Self {
        Self {
            kind: InteractionResponseType::DeferredChannelMessageWithSource,
            data: Some(InteractionCallbackData {
                flags: Some(FLAG_EPHEMERAL),
                ..Default::default()
            }),
        }
    }

    pub fn modal(
        custom_id: impl Into<String>,
        title: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        Self {
            kind: InteractionResponseType::Modal,
            data: Some(InteractionCallbackData {
                custom_id: Some(custom_id.into()),
                title: Some(title.into()),
                components,
                ..Default::default()
            }),
        }
    }
}
