//! Routes Discord events to command and quiz handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::{debug, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handlers::create_all_handlers;
use crate::commands::registry::CommandRegistry;
use crate::core::DiscordMessenger;
use crate::features::quiz::QuizAnswerHandler;

#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new(context: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        Self {
            context: Arc::new(context),
            registry,
        }
    }

    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match self.registry.get(&command.data.name) {
            Some(handler) => handler.handle(self.context.clone(), ctx, command).await,
            None => {
                warn!("No handler registered for /{}", command.data.name);
                Ok(())
            }
        }
    }

    /// Treat a direct message as a possible quiz answer
    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        if !is_quiz_reply_candidate(msg.guild_id.is_some(), &msg.content) {
            return Ok(());
        }

        let user_id = msg.author.id.to_string();
        let messenger = Arc::new(DiscordMessenger::new(ctx.http.clone()));
        let answers = QuizAnswerHandler::new(self.context.store.clone(), messenger);

        if answers.handle(&user_id, &msg.content).await?.is_none() {
            debug!("Message from {user_id} was not a quiz answer");
        }
        Ok(())
    }
}

/// Only non-command text sent in a DM can answer a quiz
pub fn is_quiz_reply_candidate(in_guild: bool, content: &str) -> bool {
    !in_guild && !content.trim().is_empty() && !content.trim_start().starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dm_text_is_candidate() {
        assert!(is_quiz_reply_candidate(false, "1:financial, 2:payment"));
    }

    #[test]
    fn test_guild_messages_are_ignored() {
        assert!(!is_quiz_reply_candidate(true, "1:financial"));
    }

    #[test]
    fn test_commands_and_blank_are_ignored() {
        assert!(!is_quiz_reply_candidate(false, "/start"));
        assert!(!is_quiz_reply_candidate(false, "  /progress"));
        assert!(!is_quiz_reply_candidate(false, "   "));
    }
}
