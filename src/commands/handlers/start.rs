//! Subscription command handler
//!
//! Handles: start
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::features::subscription::WELCOME_MESSAGE;

/// Handler for /start
pub struct StartHandler;

#[async_trait]
impl SlashCommandHandler for StartHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        let is_new = ctx.subscriptions.register(&user_id).await?;

        // Welcome is sent on every /start, registered or not
        command
            .create_interaction_response(&serenity_ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| message.content(WELCOME_MESSAGE))
            })
            .await?;

        info!(
            "Start command completed for user {user_id} ({})",
            if is_new { "new" } else { "already subscribed" }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_handler_commands() {
        assert_eq!(StartHandler.command_names(), &["start"]);
    }
}
