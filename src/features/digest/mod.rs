//! # Daily Digest Feature
//!
//! Sends each subscriber the next unseen batch of five catalog entries and
//! advances their day pointer. Users who have seen the whole catalog are
//! skipped.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Partial progress is saved when a delivery fails mid-run
//! - 1.0.0: Initial release

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::core::Messenger;
use crate::features::catalog::{Abbreviation, Catalog};
use crate::features::scheduler::{JobReport, ScheduledJob};
use crate::store::{UserMap, UserStore};

/// One outbound digest message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestDelivery {
    pub user_id: String,
    pub text: String,
}

pub fn format_digest(entries: &[Abbreviation]) -> String {
    let mut msg = String::from("📘 *Today's UK Fintech Abbreviations:*\n\n");
    for entry in entries {
        msg.push_str(&format!("*{}* — {}\n", entry.code, entry.expansion));
    }
    msg
}

/// Work out who gets which batch, in store order
///
/// Users whose day pointer is past the end of the catalog get nothing.
pub fn plan_digest(catalog: &Catalog, users: &UserMap) -> Vec<DigestDelivery> {
    users
        .iter()
        .filter_map(|(user_id, record)| {
            catalog.batch(record.day).map(|batch| DigestDelivery {
                user_id: user_id.clone(),
                text: format_digest(batch),
            })
        })
        .collect()
}

/// Scheduled job delivering the daily batch
///
/// The store is saved once at the end of the run. If a delivery fails the run
/// stops there, but the day pointers of users already served are still saved
/// before the error is returned. Earlier releases saved nothing on failure,
/// which re-sent the same batch to those users on the next run.
pub struct DigestJob {
    store: Arc<dyn UserStore>,
    catalog: Arc<Catalog>,
    messenger: Arc<dyn Messenger>,
}

impl DigestJob {
    pub fn new(
        store: Arc<dyn UserStore>,
        catalog: Arc<Catalog>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            store,
            catalog,
            messenger,
        }
    }
}

#[async_trait]
impl ScheduledJob for DigestJob {
    fn name(&self) -> &'static str {
        "daily_digest"
    }

    async fn run(&self) -> Result<JobReport> {
        let mut users = self.store.load().await;
        let deliveries = plan_digest(&self.catalog, &users);
        let mut report = JobReport {
            delivered: 0,
            skipped: users.len() - deliveries.len(),
        };
        info!(
            "📘 Sending digest to {} users ({} finished the catalog)",
            deliveries.len(),
            report.skipped
        );

        let mut failure = None;
        for delivery in deliveries {
            if let Err(e) = self.messenger.send(&delivery.user_id, &delivery.text).await {
                let user_id = &delivery.user_id;
                failure = Some(e.context(format!("digest delivery to {user_id} failed")));
                break;
            }
            if let Some(record) = users.get_mut(&delivery.user_id) {
                record.day += 1;
            }
            debug!("Digest sent to user {}", delivery.user_id);
            report.delivered += 1;
        }

        self.store.save(&users).await?;

        match failure {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }
}
