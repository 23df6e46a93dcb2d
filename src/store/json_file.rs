//! JSON file backed user store
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

use super::{UserMap, UserStore};

/// Stores the whole user mapping as one pretty-printed JSON document
///
/// Individual reads and writes are serialized so a save never interleaves
/// bytes with another save. Load/save pairs are not, see the module docs.
pub struct JsonFileStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn load(&self) -> UserMap {
        let _guard = self.io_lock.lock().await;

        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store file at {}, starting empty", self.path.display());
                return UserMap::new();
            }
            Err(e) => {
                warn!("Failed to read store {}: {e}", self.path.display());
                return UserMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(users) => users,
            Err(e) => {
                warn!(
                    "Store {} is malformed, treating as empty: {e}",
                    self.path.display()
                );
                UserMap::new()
            }
        }
    }

    async fn save(&self, users: &UserMap) -> Result<()> {
        let contents = serde_json::to_string_pretty(users)?;

        let _guard = self.io_lock.lock().await;
        tokio::fs::write(&self.path, contents).await?;
        debug!("Saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }
}
