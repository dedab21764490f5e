//! Problem feedback submitted through the `/feedback` command.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::interaction::Interaction;

/// A problem whose discussion thread lives in a Discord channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: i64,
    /// Thread (channel) id of the problem's forum post
    pub discord_id: Option<String>,
    pub title: Option<String>,
}

/// A platform account linked to a Discord user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub discord_id: Option<String>,
}

/// Options of a `/feedback` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackOptions {
    /// Discord id of the user the feedback is attributed to
    pub author_id: Option<String>,
    pub feedback: Option<String>,
    pub answer: Option<String>,
    pub correct: Option<bool>,
    pub difficulty: Option<i32>,
    pub quality: Option<i32>,
}

impl FeedbackOptions {
    /// Read the options; the author defaults to whoever ran the command.
    pub fn from_interaction(interaction: &Interaction) -> Self {
        let text = |name: &str| {
            interaction
                .option(name)
                .and_then(|opt| opt.as_str())
                .map(str::to_string)
        };
        let number = |name: &str| {
            interaction
                .option(name)
                .and_then(|opt| opt.as_i64())
                .and_then(|n| i32::try_from(n).ok())
        };

        Self {
            author_id: text("author").or_else(|| interaction.invoker_id().map(str::to_string)),
            feedback: text("feedback"),
            answer: text("answer"),
            correct: interaction.option("correct").and_then(|opt| opt.as_bool()),
            difficulty: number("difficulty"),
            quality: number("quality"),
        }
    }
}

/// Row inserted into `problem_feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub problem_id: i64,
    pub solver_id: Uuid,
    pub feedback: String,
    pub answer: Option<String>,
    pub correct: Option<bool>,
    pub difficulty: Option<i32>,
    pub quality: Option<i32>,
}

impl NewFeedback {
    pub fn build(problem: &Problem, solver: &Account, options: FeedbackOptions) -> DomainResult<Self> {
        let feedback = options
            .feedback
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| DomainError::validation("feedback text is required"))?;

        Ok(Self {
            problem_id: problem.id,
            solver_id: solver.id,
            feedback,
            answer: options.answer,
            correct: options.correct,
            difficulty: options.difficulty,
            quality: options.quality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feedback_interaction(options: serde_json::Value) -> Interaction {
        serde_json::from_value(json!({
            "id": "1",
            "application_id": "2",
            "type": 2,
            "token": "tok",
            "channel_id": "555",
            "member": { "user": { "id": "111" } },
            "data": { "name": "feedback", "options": options }
        }))
        .unwrap()
    }

    #[test]
    fn test_options_default_author_to_invoker() {
        let interaction = feedback_interaction(json!([
            { "name": "feedback", "type": 3, "value": "nice" }
        ]));

        let options = FeedbackOptions::from_interaction(&interaction);
        assert_eq!(options.author_id.as_deref(), Some("111"));
        assert_eq!(options.feedback.as_deref(), Some("nice"));
        assert_eq!(options.correct, None);
    }

    #[test]
    fn test_options_read_every_field() {
        let interaction = feedback_interaction(json!([
            { "name": "feedback", "type": 3, "value": "too easy" },
            { "name": "author", "type": 6, "value": "999" },
            { "name": "answer", "type": 3, "value": "42" },
            { "name": "correct", "type": 5, "value": true },
            { "name": "difficulty", "type": 4, "value": 3 },
            { "name": "quality", "type": 4, "value": 8 }
        ]));

        let options = FeedbackOptions::from_interaction(&interaction);
        assert_eq!(
            options,
            FeedbackOptions {
                author_id: Some("999".to_string()),
                feedback: Some("too easy".to_string()),
                answer: Some("42".to_string()),
                correct: Some(true),
                difficulty: Some(3),
                quality: Some(8),
            }
        );
    }

    #[test]
    fn test_build_requires_feedback_text() {
        let problem = Problem {
            id: 7,
            discord_id: Some("555".to_string()),
            title: None,
        };
        let account = Account {
            id: Uuid::new_v4(),
            discord_id: Some("111".to_string()),
        };

        let blank = FeedbackOptions {
            feedback: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(NewFeedback::build(&problem, &account, blank).is_err());

        let filled = FeedbackOptions {
            feedback: Some("great".to_string()),
            quality: Some(9),
            ..Default::default()
        };
        let row = NewFeedback::build(&problem, &account, filled).unwrap();
        assert_eq!(row.problem_id, 7);
        assert_eq!(row.solver_id, account.id);
        assert_eq!(row.quality, Some(9));
    }
}
