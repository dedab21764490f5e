//! Routing of verified interactions to their responses.

use tracing::debug;

use common::AppResult;
use domain::{
    command::{COMMAND_FEEDBACK, COMMAND_PING, COMMAND_PROBLEM},
    component::BUTTON_STYLE_PRIMARY,
    Component, DomainError, Interaction, InteractionCallbackData, InteractionResponse,
    InteractionType, PING_BUTTON_ID, PROBLEM_MODAL_ID, PROBLEM_TITLE_INPUT_ID,
    REPLY_BUTTON_CLICKED, REPLY_PONG, REPLY_UNKNOWN_COMPONENT, REPLY_UNKNOWN_MODAL,
};

/// How the webhook should answer an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Answer with this response right away.
    Immediate(InteractionResponse),
    /// Acknowledge with a deferred response and finish the feedback flow
    /// in the background.
    DeferredFeedback,
}

/// Decide the reply for an interaction. Pure; performs no I/O.
pub fn dispatch(interaction: &Interaction) -> AppResult<Reply> {
    debug!(
        "Interaction {} of type {:?}",
        interaction.id,
        interaction.kind
    );

    match interaction.kind {
        InteractionType::Ping => Ok(Reply::Immediate(InteractionResponse::pong())),
        InteractionType::ApplicationCommand => command_reply(interaction),
        InteractionType::MessageComponent => Ok(Reply::Immediate(component_reply(interaction))),
        InteractionType::ModalSubmit => modal_reply(interaction).map(Reply::Immediate),
        _ => Ok(Reply::Immediate(InteractionResponse::pong())),
    }
}

fn command_reply(interaction: &Interaction) -> AppResult<Reply> {
    let name = interaction
        .command_name()
        .ok_or_else(|| DomainError::malformed("application command without a name"))?;

    let reply = match name {
        COMMAND_PING => Reply::Immediate(ping_reply()),
        COMMAND_PROBLEM => Reply::Immediate(problem_modal(interaction)),
        COMMAND_FEEDBACK => Reply::DeferredFeedback,
        other => Reply::Immediate(InteractionResponse::ephemeral(format!(
            "Unknown command: {}",
            other
        ))),
    };

    Ok(reply)
}

fn ping_reply() -> InteractionResponse {
    InteractionResponse::message(
        InteractionCallbackData::ephemeral(REPLY_PONG).with_components(vec![
            Component::action_row(vec![Component::button(
                PING_BUTTON_ID,
                "Click me!",
                BUTTON_STYLE_PRIMARY,
            )]),
        ]),
    )
}

fn problem_modal(interaction: &Interaction) -> InteractionResponse {
    let title = interaction
        .option("title")
        .and_then(|opt| opt.as_str())
        .map(str::to_string);

    InteractionResponse::modal(
        PROBLEM_MODAL_ID,
        "Create a problem",
        vec![Component::action_row(vec![Component::short_text_input(
            PROBLEM_TITLE_INPUT_ID,
            "Title",
            title,
        )])],
    )
}

fn component_reply(interaction: &Interaction) -> InteractionResponse {
    match interaction.custom_id() {
        Some(PING_BUTTON_ID) => InteractionResponse::ephemeral(REPLY_BUTTON_CLICKED),
        _ => InteractionResponse::ephemeral(REPLY_UNKNOWN_COMPONENT),
    }
}

fn modal_reply(interaction: &Interaction) -> AppResult<InteractionResponse> {
    match interaction.custom_id() {
        Some(PROBLEM_MODAL_ID) => {
            let title = interaction.first_modal_value()?;
            Ok(InteractionResponse::ephemeral(format!(
                "Created problem: {}",
                title
            )))
        }
        _ => Ok(InteractionResponse::ephemeral(REPLY_UNKNOWN_MODAL)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use domain::{component::ComponentType, InteractionResponseType, FLAG_EPHEMERAL};
    use serde_json::{json, Value};

    fn interaction(body: Value) -> Interaction {
        let mut base = json!({
            "id": "1",
            "application_id": "42",
            "token": "tok",
        });
        if let (Value::Object(base), Value::Object(extra)) = (&mut base, body) {
            base.extend(extra);
        }
        serde_json::from_value(base).unwrap()
    }

    fn immediate(reply: Reply) -> InteractionResponse {
        match reply {
            Reply::Immediate(response) => response,
            Reply::DeferredFeedback => panic!("expected an immediate reply"),
        }
    }

    #[test]
    fn test_ping_is_ponged() {
        let reply = dispatch(&interaction(json!({ "type": 1 }))).unwrap();
        assert_eq!(immediate(reply), InteractionResponse::pong());
    }

    #[test]
    fn test_ping_command_has_button() {
        let reply = dispatch(&interaction(json!({
            "type": 2,
            "data": { "name": "ping" }
        })))
        .unwrap();

        let response = immediate(reply);
        assert_eq!(response.kind, InteractionResponseType::ChannelMessageWithSource);
        let data = response.data.unwrap();
        assert_eq!(data.content.as_deref(), Some("Pong!"));
        assert_eq!(data.flags, Some(FLAG_EPHEMERAL));
        assert_eq!(data.components[0].kind, ComponentType::ActionRow);
        let button = &data.components[0].components[0];
        assert_eq!(button.custom_id.as_deref(), Some(PING_BUTTON_ID));
        assert_eq!(button.label.as_deref(), Some("Click me!"));
    }

    #[test]
    fn test_problem_command_opens_prefilled_modal() {
        let reply = dispatch(&interaction(json!({
            "type": 2,
            "data": {
                "name": "problem",
                "options": [{ "name": "title", "type": 3, "value": "Triangles" }]
            }
        })))
        .unwrap();

        let response = immediate(reply);
        assert_eq!(response.kind, InteractionResponseType::Modal);
        let data = response.data.unwrap();
        assert_eq!(data.custom_id.as_deref(), Some(PROBLEM_MODAL_ID));
        assert_eq!(data.title.as_deref(), Some("Create a problem"));
        let input = &data.components[0].components[0];
        assert_eq!(input.custom_id.as_deref(), Some(PROBLEM_TITLE_INPUT_ID));
        assert_eq!(input.value.as_deref(), Some("Triangles"));
    }

    #[test]
    fn test_feedback_command_is_deferred() {
        let reply = dispatch(&interaction(json!({
            "type": 2,
            "data": { "name": "feedback" }
        })))
        .unwrap();
        assert_eq!(reply, Reply::DeferredFeedback);
    }

    #[test]
    fn test_unknown_command() {
        let reply = dispatch(&interaction(json!({
            "type": 2,
            "data": { "name": "dance" }
        })))
        .unwrap();

        let data = immediate(reply).data.unwrap();
        assert_eq!(data.content.as_deref(), Some("Unknown command: dance"));
        assert!(data.is_ephemeral());
    }

    #[test]
    fn test_command_without_name_is_bad_request() {
        let err = dispatch(&interaction(json!({ "type": 2 }))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_button_clicks() {
        let known = dispatch(&interaction(json!({
            "type": 3,
            "data": { "custom_id": "ping_button", "component_type": 2 }
        })))
        .unwrap();
        assert_eq!(
            immediate(known).data.unwrap().content.as_deref(),
            Some("Button clicked!")
        );

        let unknown = dispatch(&interaction(json!({
            "type": 3,
            "data": { "custom_id": "other", "component_type": 2 }
        })))
        .unwrap();
        assert_eq!(
            immediate(unknown).data.unwrap().content.as_deref(),
            Some("Unknown component")
        );
    }

    #[test]
    fn test_problem_modal_submission() {
        let reply = dispatch(&interaction(json!({
            "type": 5,
            "data": {
                "custom_id": "problem_modal",
                "components": [{
                    "type": 1,
                    "components": [{ "type": 4, "custom_id": "problem_title", "value": "Squares" }]
                }]
            }
        })))
        .unwrap();

        assert_eq!(
            immediate(reply).data.unwrap().content.as_deref(),
            Some("Created problem: Squares")
        );
    }

    #[test]
    fn test_problem_modal_without_value_is_bad_request() {
        let err = dispatch(&interaction(json!({
            "type": 5,
            "data": { "custom_id": "problem_modal", "components": [] }
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_unknown_modal_and_other_types() {
        let modal = dispatch(&interaction(json!({
            "type": 5,
            "data": { "custom_id": "mystery" }
        })))
        .unwrap();
        assert_eq!(
            immediate(modal).data.unwrap().content.as_deref(),
            Some("Unknown modal")
        );

        let autocomplete = dispatch(&interaction(json!({ "type": 4 }))).unwrap();
        assert_eq!(immediate(autocomplete), InteractionResponse::pong());
    }
}
