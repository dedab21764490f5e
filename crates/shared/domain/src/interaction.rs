//! Incoming interaction payloads.
//!
//! Only the fields the bridge reads are modelled; Discord sends many more
//! and serde ignores them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::Component;
use crate::error::{DomainError, DomainResult};

/// Interaction kinds Discord delivers to the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    MessageComponent,
    ApplicationCommandAutocomplete,
    ModalSubmit,
    /// A type added by Discord after this code was written
    Unknown(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            3 => InteractionType::MessageComponent,
            4 => InteractionType::ApplicationCommandAutocomplete,
            5 => InteractionType::ModalSubmit,
            other => InteractionType::Unknown(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(kind: InteractionType) -> Self {
        match kind {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::MessageComponent => 3,
            InteractionType::ApplicationCommandAutocomplete => 4,
            InteractionType::ModalSubmit => 5,
            InteractionType::Unknown(other) => other,
        }
    }
}

/// Discord user (only the id is needed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Guild member wrapper sent for interactions inside a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildMember {
    pub user: Option<DiscordUser>,
}

/// A resolved slash-command option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub value: Option<Value>,
}

impl CommandOption {
    /// Value as a string. Snowflakes (user options) arrive as strings too.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_ref().and_then(Value::as_i64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_ref().and_then(Value::as_bool)
    }
}

/// The `data` member of an interaction. Which fields are set depends on
/// the interaction type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionData {
    /// Command id (application commands)
    pub id: Option<String>,
    /// Command name (application commands)
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// Component or modal id
    pub custom_id: Option<String>,
    pub component_type: Option<u8>,
    /// Submitted rows (modal submit)
    #[serde(default)]
    pub components: Vec<Component>,
}

/// An interaction webhook event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub application_id: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub data: Option<InteractionData>,
    pub guild_id: Option<String>,
    pub channel_id: Option<String>,
    pub member: Option<GuildMember>,
    /// Set instead of `member` when invoked in a DM
    pub user: Option<DiscordUser>,
    pub token: String,
}

impl Interaction {
    /// Command name for application commands.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.name.as_deref())
    }

    /// Custom id for components and modal submissions.
    pub fn custom_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.custom_id.as_deref())
    }

    /// Look up a command option by name.
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.data
            .as_ref()
            .and_then(|d| d.options.iter().find(|opt| opt.name == name))
    }

    /// Discord id of the user who triggered the interaction.
    pub fn invoker_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref())
            .map(|u| u.id.as_str())
    }

    /// Value of the first input of the first row of a modal submission.
    pub fn first_modal_value(&self) -> DomainResult<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.components.first())
            .and_then(|row| row.components.first())
            .and_then(|input| input.value.as_deref())
            .ok_or_else(|| DomainError::malformed("modal submission has no input value"))
    }
}
