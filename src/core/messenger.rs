//! Outbound delivery to subscribers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Messenger trait with Discord DM implementation

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::Arc;

/// Sends a text message to a user identified by their store key
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, user_id: &str, text: &str) -> Result<()>;
}

/// Parse a store key back into a Discord user id
pub fn parse_user_id(user_id: &str) -> Result<UserId> {
    let id: u64 = user_id
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid user id '{}': {}", user_id, e))?;
    Ok(UserId(id))
}

/// Delivers messages as Discord direct messages
#[derive(Clone)]
pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn send(&self, user_id: &str, text: &str) -> Result<()> {
        let user = parse_user_id(user_id)?;
        let http: &Http = &self.http;

        let dm = user.create_dm_channel(http).await?;
        dm.send_message(http, |m| m.content(text)).await?;

        debug!("Delivered {} chars to user {user_id}", text.len());
        Ok(())
    }
}

#[cfg(test)]
pub use recording::RecordingMessenger;
