//! Progress command handler
//!
//! Handles: progress
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::features::progress::format_progress;

/// Handler for /progress, never writes to the store
pub struct ProgressHandler;

#[async_trait]
impl SlashCommandHandler for ProgressHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["progress"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        let users = ctx.store.load().await;
        let text = format_progress(&ctx.catalog, users.get(&user_id));

        command
            .create_interaction_response(&serenity_ctx.http, |r| {
                r.kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|m| m.content(text))
            })
            .await?;

        info!("Progress command completed for user {user_id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_handler_commands() {
        assert_eq!(ProgressHandler.command_names(), &["progress"]);
    }
}
