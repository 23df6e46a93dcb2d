//! # Features
//!
//! Each feature lives in its own module with a version header.

pub mod catalog;
pub mod digest;
pub mod progress;
pub mod quiz;
pub mod scheduler;
pub mod subscription;

pub use catalog::{Abbreviation, Catalog, BATCH_SIZE};
pub use digest::DigestJob;
pub use progress::format_progress;
pub use quiz::{Quiz, QuizAnswerHandler, QuizDispatchJob, QUIZ_LEN};
pub use scheduler::{JobReport, JobScheduler, Schedule, ScheduledJob};
pub use subscription::{SubscriptionHandler, WELCOME_MESSAGE};

/// Feature metadata reported at startup
#[derive(Debug, Clone, Copy)]
pub struct FeatureInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn get_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            id: "catalog",
            name: "Catalog",
            version: "1.1.0",
        },
        FeatureInfo {
            id: "subscription",
            name: "Subscription",
            version: "1.0.0",
        },
        FeatureInfo {
            id: "digest",
            name: "Daily Digest",
            version: "1.1.0",
        },
        FeatureInfo {
            id: "quiz",
            name: "Weekly Quiz",
            version: "1.2.0",
        },
        FeatureInfo {
            id: "progress",
            name: "Progress",
            version: "1.0.0",
        },
        FeatureInfo {
            id: "scheduler",
            name: "Scheduler",
            version: "1.1.0",
        },
    ]
}
