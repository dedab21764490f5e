//! The `/feedback` command: records solver feedback on the problem whose
//! forum thread the command was used in.

use tracing::{error, info, warn};

use common::AppResult;
use domain::{
    DomainError, FeedbackOptions, Interaction, InteractionCallbackData, NewFeedback,
    REPLY_FEEDBACK_FAILED, REPLY_FEEDBACK_REQUIRED, REPLY_FEEDBACK_SUBMITTED, REPLY_NO_ACCOUNT,
    REPLY_NO_PROBLEM,
};

use crate::clients::DiscordApi;
use crate::repository::DataStore;

/// Result of a feedback submission, as reported back to the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    Submitted,
    NoProblem,
    NoAccount,
    MissingText,
    Failed,
}

impl FeedbackOutcome {
    pub fn message(self) -> &'static str {
        match self {
            FeedbackOutcome::Submitted => REPLY_FEEDBACK_SUBMITTED,
            FeedbackOutcome::NoProblem => REPLY_NO_PROBLEM,
            FeedbackOutcome::NoAccount => REPLY_NO_ACCOUNT,
            FeedbackOutcome::MissingText => REPLY_FEEDBACK_REQUIRED,
            FeedbackOutcome::Failed => REPLY_FEEDBACK_FAILED,
        }
    }
}

/// Record the feedback carried by `interaction`.
pub async fn submit_feedback(store: &dyn DataStore, interaction: &Interaction) -> FeedbackOutcome {
    match try_submit(store, interaction).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Feedback for interaction {} failed: {}", interaction.id, e);
            FeedbackOutcome::Failed
        }
    }
}

async fn try_submit(store: &dyn DataStore, interaction: &Interaction) -> AppResult<FeedbackOutcome> {
    let Some(channel_id) = interaction.channel_id.as_deref() else {
        return Ok(FeedbackOutcome::NoProblem);
    };
    let Some(problem) = store.find_problem_by_channel(channel_id).await? else {
        return Ok(FeedbackOutcome::NoProblem);
    };

    let options = FeedbackOptions::from_interaction(interaction);
    let Some(author_id) = options.author_id.clone() else {
        return Ok(FeedbackOutcome::NoAccount);
    };
    let Some(account) = store.find_account_by_discord_id(&author_id).await? else {
        return Ok(FeedbackOutcome::NoAccount);
    };

    let feedback = match NewFeedback::build(&problem, &account, options) {
        Ok(feedback) => feedback,
        Err(DomainError::Validation(_)) => return Ok(FeedbackOutcome::MissingText),
        Err(e) => return Err(e.into()),
    };

    store.add_problem_feedback(feedback).await?;
    info!("Feedback recorded on problem {} by {}", problem.id, account.id);

    Ok(FeedbackOutcome::Submitted)
}

/// Run the feedback flow and replace the deferred response with its outcome.
pub async fn complete_feedback(
    discord: &dyn DiscordApi,
    store: &dyn DataStore,
    interaction: &Interaction,
) -> FeedbackOutcome {
    let outcome = submit_feedback(store, interaction).await;

    let reply = InteractionCallbackData::ephemeral(outcome.message());
    if let Err(e) = discord
        .edit_original_response(&interaction.token, &reply)
        .await
    {
        warn!(
            "Could not deliver feedback reply for interaction {}: {}",
            interaction.id, e
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockDiscordApi;
    use crate::repository::MockDataStore;
    use common::AppError;
    use domain::{Account, Problem};
    use serde_json::json;
    use uuid::Uuid;

    fn feedback_interaction(options: serde_json::Value) -> Interaction {
        serde_json::from_value(json!({
            "id": "900",
            "application_id": "42",
            "type": 2,
            "token": "interaction-token",
            "channel_id": "555",
            "member": { "user": { "id": "777", "username": "solver" } },
            "data": { "name": "feedback", "options": options }
        }))
        .unwrap()
    }

    fn problem() -> Problem {
        Problem {
            id: 12,
            discord_id: Some("555".to_string()),
            title: Some("Triangles".to_string()),
        }
    }

    fn account(id: Uuid) -> Account {
        Account {
            id,
            discord_id: Some("777".to_string()),
        }
    }

    #[tokio::test]
    async fn test_feedback_submitted() {
        let solver = Uuid::new_v4();
        let mut store = MockDataStore::new();
        store
            .expect_find_problem_by_channel()
            .withf(|channel_id| channel_id == "555")
            .returning(|_| Ok(Some(problem())));
        store
            .expect_find_account_by_discord_id()
            .withf(|discord_id| discord_id == "777")
            .returning(move |_| Ok(Some(account(solver))));
        store
            .expect_add_problem_feedback()
            .withf(move |f| {
                f.problem_id == 12
                    && f.solver_id == solver
                    && f.feedback == "Nice problem"
                    && f.difficulty == Some(4)
            })
            .times(1)
            .returning(|_| Ok(()));

        let interaction = feedback_interaction(json!([
            { "name": "feedback", "type": 3, "value": "Nice problem" },
            { "name": "difficulty", "type": 4, "value": 4 }
        ]));

        assert_eq!(
            submit_feedback(&store, &interaction).await,
            FeedbackOutcome::Submitted
        );
    }

    #[tokio::test]
    async fn test_author_option_overrides_invoker() {
        let mut store = MockDataStore::new();
        store
            .expect_find_problem_by_channel()
            .returning(|_| Ok(Some(problem())));
        store
            .expect_find_account_by_discord_id()
            .withf(|discord_id| discord_id == "888")
            .times(1)
            .returning(|_| Ok(None));

        let interaction = feedback_interaction(json!([
            { "name": "feedback", "type": 3, "value": "Nice" },
            { "name": "author", "type": 6, "value": "888" }
        ]));

        assert_eq!(
            submit_feedback(&store, &interaction).await,
            FeedbackOutcome::NoAccount
        );
    }

    #[tokio::test]
    async fn test_no_problem_for_channel() {
        let mut store = MockDataStore::new();
        store
            .expect_find_problem_by_channel()
            .returning(|_| Ok(None));
        store.expect_find_account_by_discord_id().never();

        let interaction = feedback_interaction(json!([
            { "name": "feedback", "type": 3, "value": "Nice" }
        ]));

        assert_eq!(
            submit_feedback(&store, &interaction).await,
            FeedbackOutcome::NoProblem
        );
    }

    #[tokio::test]
    async fn test_blank_feedback_is_rejected() {
        let mut store = MockDataStore::new();
        store
            .expect_find_problem_by_channel()
            .returning(|_| Ok(Some(problem())));
        store
            .expect_find_account_by_discord_id()
            .returning(|_| Ok(Some(account(Uuid::new_v4()))));
        store.expect_add_problem_feedback().never();

        let interaction = feedback_interaction(json!([
            { "name": "feedback", "type": 3, "value": "   " }
        ]));

        assert_eq!(
            submit_feedback(&store, &interaction).await,
            FeedbackOutcome::MissingText
        );
    }

    #[tokio::test]
    async fn test_store_error_reports_failure() {
        let mut store = MockDataStore::new();
        store
            .expect_find_problem_by_channel()
            .returning(|_| Ok(Some(problem())));
        store
            .expect_find_account_by_discord_id()
            .returning(|_| Ok(Some(account(Uuid::new_v4()))));
        store
            .expect_add_problem_feedback()
            .returning(|_| Err(AppError::internal("insert failed")));

        let interaction = feedback_interaction(json!([
            { "name": "feedback", "type": 3, "value": "Nice" }
        ]));

        assert_eq!(
            submit_feedback(&store, &interaction).await,
            FeedbackOutcome::Failed
        );
    }

    #[tokio::test]
    async fn test_complete_feedback_edits_original_response() {
        let mut store = MockDataStore::new();
        store
            .expect_find_problem_by_channel()
            .returning(|_| Ok(None));

        let mut discord = MockDiscordApi::new();
        discord
            .expect_edit_original_response()
            .withf(|token, data| {
                token == "interaction-token"
                    && data.content.as_deref() == Some(REPLY_NO_PROBLEM)
                    && data.is_ephemeral()
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let interaction = feedback_interaction(json!([]));
        let outcome = complete_feedback(&discord, &store, &interaction).await;

        assert_eq!(outcome, FeedbackOutcome::NoProblem);
    }

    #[tokio::test]
    async fn test_complete_feedback_survives_delivery_failure() {
        let mut store = MockDataStore::new();
        store
            .expect_find_problem_by_channel()
            .returning(|_| Ok(None));

        let mut discord = MockDiscordApi::new();
        discord
            .expect_edit_original_response()
            .returning(|_, _| Err(AppError::upstream(404, r#"{"message":"Unknown Webhook"}"#)));

        let interaction = feedback_interaction(json!([]));
        assert_eq!(
            complete_feedback(&discord, &store, &interaction).await,
            FeedbackOutcome::NoProblem
        );
    }
}
