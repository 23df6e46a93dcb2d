// Core layer - configuration and delivery
pub mod core;

// Features layer - catalog, digest, quiz, scheduling
pub mod features;

// Persistence
pub mod store;

// Application layer
pub mod command_handler;
pub mod commands;

pub use crate::core::{Config, DiscordMessenger, Messenger};

pub use features::{
    // Catalog
    Abbreviation, Catalog,
    // Jobs
    DigestJob, QuizDispatchJob,
    // Handlers
    QuizAnswerHandler, SubscriptionHandler,
    // Scheduling
    JobScheduler, Schedule,
};

pub use store::{JsonFileStore, MemoryStore, UserMap, UserRecord, UserStore};
