//! Data access for settings, problems, accounts and feedback.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    QueryFilter, QueryOrder, Statement, TransactionTrait,
};
use tracing::debug;

use super::entities::{
    problem::{self, Entity as ProblemEntity},
    problem_feedback,
    settings::{self, Entity as SettingsEntity},
    user::{self, Entity as UserEntity},
};
use common::{AppError, AppResult};
use domain::{Account, NewFeedback, Problem, Settings};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Read the site settings document, if a row exists
    async fn fetch_settings(&self) -> AppResult<Option<Settings>>;

    /// Find the problem whose discussion thread is `channel_id`
    async fn find_problem_by_channel(&self, channel_id: &str) -> AppResult<Option<Problem>>;

    /// Find the platform account linked to a Discord user
    async fn find_account_by_discord_id(&self, discord_id: &str) -> AppResult<Option<Account>>;

    /// Insert a feedback row
    async fn add_problem_feedback(&self, feedback: NewFeedback) -> AppResult<()>;

    /// Check connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// Postgres implementation of [`DataStore`].
pub struct PgStore {
    db: DatabaseConnection,
}

impl PgStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DataStore for PgStore {
    async fn fetch_settings(&self) -> AppResult<Option<Settings>> {
        let row = SettingsEntity::find()
            .order_by_asc(settings::Column::Id)
            .one(&self.db)
            .await?;

        match row.and_then(|r| r.settings) {
            Some(document) => serde_json::from_value(document)
                .map(Some)
                .map_err(|e| AppError::internal(format!("Malformed settings document: {}", e))),
            None => Ok(None),
        }
    }

    async fn find_problem_by_channel(&self, channel_id: &str) -> AppResult<Option<Problem>> {
        // Row-level security on `problems` keys off this setting, and it
        // must be local to the transaction the lookup runs in.
        let txn = self.db.begin().await?;
        txn.execute(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT set_config('app.discord_channel_id', $1, true)",
            [channel_id.into()],
        ))
        .await?;

        let problem = ProblemEntity::find()
            .filter(problem::Column::DiscordId.eq(channel_id))
            .one(&txn)
            .await?;
        txn.commit().await?;

        debug!("Problem lookup for channel {}: {}", channel_id, problem.is_some());
        Ok(problem.map(Problem::from))
    }

    async fn find_account_by_discord_id(&self, discord_id: &str) -> AppResult<Option<Account>> {
        let account = UserEntity::find()
            .filter(user::Column::DiscordId.eq(discord_id))
            .one(&self.db)
            .await?;

        Ok(account.map(Account::from))
    }

    async fn add_problem_feedback(&self, feedback: NewFeedback) -> AppResult<()> {
        problem_feedback::ActiveModel::from(feedback)
            .insert(&self.db)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
