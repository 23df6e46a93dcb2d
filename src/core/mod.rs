//! # Core Module
//!
//! Configuration and the outbound delivery seam shared by every feature.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add messenger module with Discord DM delivery
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod messenger;

// Re-export commonly used items
pub use config::Config;
pub use messenger::{parse_user_id, DiscordMessenger, Messenger};
