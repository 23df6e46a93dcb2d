//! In-memory user store
//!
//! Same whole-document contract as the file store, without touching disk.
//! Tests use it to inspect what a job persisted and how often.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use super::{UserMap, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<UserMap>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: UserMap) -> Self {
        Self {
            users: Mutex::new(users),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of completed saves since creation
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn load(&self) -> UserMap {
        self.users.lock().await.clone()
    }

    async fn save(&self, users: &UserMap) -> Result<()> {
        *self.users.lock().await = users.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
