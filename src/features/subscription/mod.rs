//! # Subscription Feature
//!
//! Registers new subscribers with a fresh progress record.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::store::{UserRecord, UserStore};

pub const WELCOME_MESSAGE: &str =
    "Welcome! I will send 5 new UK fintech abbreviations every day and a weekly quiz!";

/// Idempotent registration: existing records are never reset
pub struct SubscriptionHandler {
    store: Arc<dyn UserStore>,
}

impl SubscriptionHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Returns true if the user was not known before
    pub async fn register(&self, user_id: &str) -> Result<bool> {
        let mut users = self.store.load().await;
        if users.contains_key(user_id) {
            return Ok(false);
        }

        users.insert(user_id.to_string(), UserRecord::new());
        self.store.save(&users).await?;
        info!("👋 New subscriber {user_id} ({} total)", users.len());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, UserMap};

    #[tokio::test]
    async fn test_register_new_user() {
        let store = Arc::new(MemoryStore::new());
        let handler = SubscriptionHandler::new(store.clone());

        assert!(handler.register("123").await.unwrap());
        assert_eq!(store.load().await["123"], UserRecord::new());
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_register_existing_user_keeps_progress() {
        let mut users = UserMap::new();
        users.insert("123".to_string(), UserRecord { day: 2, quiz: None });
        let store = Arc::new(MemoryStore::with_users(users));
        let handler = SubscriptionHandler::new(store.clone());

        assert!(!handler.register("123").await.unwrap());
        assert_eq!(store.load().await["123"].day, 2);
        assert_eq!(store.save_count(), 0);
    }
}
