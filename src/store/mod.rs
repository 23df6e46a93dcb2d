//! # User Store
//!
//! Whole-document persistence for per-user progress. Every operation loads the
//! full mapping, mutates it in memory and saves it back. There is no locking
//! across a load/save pair: two jobs interleaving their pairs can lose each
//! other's updates (last writer wins).
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Store trait with in-memory implementation for tests
//! - 1.0.0: JSON file store

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::features::quiz::Quiz;

/// Full store contents keyed by user id (decimal Discord snowflake)
pub type UserMap = BTreeMap<String, UserRecord>;

/// Progress for a single subscriber
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Number of digest batches already delivered
    pub day: u32,
    /// Quiz issued by the last dispatch and not yet answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
}

/// Where a user is in the quiz cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState<'a> {
    Idle,
    AwaitingAnswer(&'a Quiz),
}

impl UserRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiz_state(&self) -> QuizState<'_> {
        match &self.quiz {
            Some(quiz) => QuizState::AwaitingAnswer(quiz),
            None => QuizState::Idle,
        }
    }
}

/// Load/save contract shared by the file store and test fakes
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the persisted mapping, or an empty one if nothing usable is stored
    async fn load(&self) -> UserMap;

    /// Overwrites the persisted mapping
    async fn save(&self, users: &UserMap) -> Result<()>;
}
