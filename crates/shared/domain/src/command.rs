//! Slash command catalogue registered with Discord.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application command option types
pub const OPTION_STRING: u8 = 3;
pub const OPTION_INTEGER: u8 = 4;
pub const OPTION_BOOLEAN: u8 = 5;
pub const OPTION_USER: u8 = 6;

pub const COMMAND_PING: &str = "ping";
pub const COMMAND_PROBLEM: &str = "problem";
pub const COMMAND_FEEDBACK: &str = "feedback";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandChoice {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOptionDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<CommandChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

impl CommandOptionDefinition {
    fn new(name: &str, description: &str, kind: u8) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required: false,
            choices: Vec::new(),
            min_value: None,
            max_value: None,
        }
    }

    pub fn string(name: &str, description: &str) -> Self {
        Self::new(name, description, OPTION_STRING)
    }

    pub fn integer(name: &str, description: &str) -> Self {
        Self::new(name, description, OPTION_INTEGER)
    }

    pub fn boolean(name: &str, description: &str) -> Self {
        Self::new(name, description, OPTION_BOOLEAN)
    }

    pub fn user(name: &str, description: &str) -> Self {
        Self::new(name, description, OPTION_USER)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    pub fn choice(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.choices.push(CommandChoice {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }
}

/// A chat-input command as sent to the bulk-overwrite endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionDefinition>,
}

impl CommandDefinition {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: CommandOptionDefinition) -> Self {
        self.options.push(option);
        self
    }
}

/// Every command the interaction handler knows how to answer.
pub fn application_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            COMMAND_PING,
            "Checks if bot is online - should respond pong",
        ),
        CommandDefinition::new(COMMAND_PROBLEM, "Create a new problem")
            .option(CommandOptionDefinition::string("title", "The title of the problem").required())
            .option(
                CommandOptionDefinition::integer("difficulty", "Problem difficulty")
                    .required()
                    .choice("Easy", 1)
                    .choice("Medium", 2)
                    .choice("Hard", 3),
            ),
        CommandDefinition::new(
            COMMAND_FEEDBACK,
            "Submit feedback on the problem in this thread",
        )
        .option(CommandOptionDefinition::string("feedback", "Your feedback").required())
        .option(CommandOptionDefinition::user(
            "author",
            "Who gave the feedback (defaults to you)",
        ))
        .option(CommandOptionDefinition::string("answer", "The answer you got"))
        .option(CommandOptionDefinition::boolean(
            "correct",
            "Whether your answer was correct",
        ))
        .option(CommandOptionDefinition::integer("difficulty", "Perceived difficulty").range(1, 10))
        .option(CommandOptionDefinition::integer("quality", "Problem quality").range(1, 10)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalogue_names_are_unique() {
        let commands = application_commands();
        let mut names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), commands.len());
    }

    #[test]
    fn test_problem_command_wire_format() {
        let problem = application_commands()
            .into_iter()
            .find(|c| c.name == COMMAND_PROBLEM)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&problem).unwrap(),
            json!({
                "name": "problem",
                "description": "Create a new problem",
                "options": [
                    {
                        "name": "title",
                        "description": "The title of the problem",
                        "type": 3,
                        "required": true
                    },
                    {
                        "name": "difficulty",
                        "description": "Problem difficulty",
                        "type": 4,
                        "required": true,
                        "choices": [
                            { "name": "Easy", "value": 1 },
                            { "name": "Medium", "value": 2 },
                            { "name": "Hard", "value": 3 }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_ping_has_no_options_key() {
        let ping = &application_commands()[0];
        let value = serde_json::to_value(ping).unwrap();
        assert!(value.get("options").is_none());
    }
}
