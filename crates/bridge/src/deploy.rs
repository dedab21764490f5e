//! Registration of slash commands and linked-roles metadata.

use tracing::info;

use common::AppResult;
use domain::{application_commands, role_connection_metadata};

use crate::clients::DiscordApi;

/// What Discord accepted during a deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploySummary {
    pub commands: usize,
    pub metadata: usize,
}

/// Overwrite the command catalogue and role-connection metadata.
///
/// With a guild id the commands are registered in that guild only, which
/// takes effect immediately; global commands can take a while to appear.
pub async fn deploy(discord: &dyn DiscordApi, guild_id: Option<&str>) -> AppResult<DeploySummary> {
    let commands = application_commands();
    let registered = match guild_id {
        Some(guild_id) => discord.register_guild_commands(guild_id, &commands).await?,
        None => discord.register_global_commands(&commands).await?,
    };
    info!("Registered {} application commands", registered);

    let metadata = discord
        .register_role_connection_metadata(&role_connection_metadata())
        .await?;
    info!("Registered {} role connection metadata records", metadata);

    Ok(DeploySummary {
        commands: registered,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockDiscordApi;
    use common::AppError;

    #[tokio::test]
    async fn test_global_deploy() {
        let mut discord = MockDiscordApi::new();
        discord
            .expect_register_global_commands()
            .withf(|commands| {
                let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
                names == ["ping", "problem", "feedback"]
            })
            .times(1)
            .returning(|commands| Ok(commands.len()));
        discord.expect_register_guild_commands().never();
        discord
            .expect_register_role_connection_metadata()
            .withf(|records| records.len() == 3)
            .returning(|records| Ok(records.len()));

        let summary = deploy(&discord, None).await.unwrap();
        assert_eq!(summary, DeploySummary { commands: 3, metadata: 3 });
    }

    #[tokio::test]
    async fn test_guild_deploy() {
        let mut discord = MockDiscordApi::new();
        discord.expect_register_global_commands().never();
        discord
            .expect_register_guild_commands()
            .withf(|guild_id, _| guild_id == "1000")
            .times(1)
            .returning(|_, commands| Ok(commands.len()));
        discord
            .expect_register_role_connection_metadata()
            .returning(|records| Ok(records.len()));

        let summary = deploy(&discord, Some("1000")).await.unwrap();
        assert_eq!(summary.commands, 3);
    }

    #[tokio::test]
    async fn test_metadata_skipped_when_commands_fail() {
        let mut discord = MockDiscordApi::new();
        discord
            .expect_register_global_commands()
            .returning(|_| Err(AppError::upstream(401, r#"{"message":"401: Unauthorized"}"#)));
        discord.expect_register_role_connection_metadata().never();

        assert!(deploy(&discord, None).await.is_err());
    }
}
