//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add ProgressHandler
//! - 1.0.0: StartHandler

pub mod progress;
pub mod start;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(start::StartHandler),
        Arc::new(progress::ProgressHandler),
    ]
}
