//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use crate::features::catalog::Catalog;
use crate::features::subscription::SubscriptionHandler;
use crate::store::UserStore;

/// State every slash command and message handler can reach
#[derive(Clone)]
pub struct CommandContext {
    pub store: Arc<dyn UserStore>,
    pub catalog: Arc<Catalog>,
    pub subscriptions: Arc<SubscriptionHandler>,
}

impl CommandContext {
    pub fn new(store: Arc<dyn UserStore>, catalog: Arc<Catalog>) -> Self {
        Self {
            subscriptions: Arc::new(SubscriptionHandler::new(store.clone())),
            store,
            catalog,
        }
    }
}
