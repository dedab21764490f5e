//! Domain layer - Discord wire types and bridge rules.
//!
//! This crate contains pure logic with no I/O: interaction payloads and
//! responses, the command and metadata catalogues, forum-tag merging,
//! settings defaults and feedback records.

pub mod command;
pub mod component;
pub mod constants;
pub mod error;
pub mod feedback;
pub mod forum;
pub mod interaction;
pub mod response;
pub mod role_connection;
pub mod settings;
pub mod update;

pub use command::{application_commands, CommandDefinition};
pub use component::Component;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use feedback::{Account, FeedbackOptions, NewFeedback, Problem};
pub use forum::{Channel, ForumTag};
pub use interaction::{Interaction, InteractionType};
pub use response::{InteractionCallbackData, InteractionResponse, InteractionResponseType};
pub use role_connection::{role_connection_metadata, RoleConnectionMetadata};
pub use settings::Settings;
pub use update::{ProblemUpdate, WebhookMessage};
