//! Weekly quiz dispatch job
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Runs as a ScheduledJob with a report
//! - 1.0.0: Initial release

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::{format_quiz_prompt, plan_quizzes};
use crate::core::Messenger;
use crate::features::catalog::Catalog;
use crate::features::scheduler::{JobReport, ScheduledJob};
use crate::store::UserStore;

/// Issues a new quiz to every known user, replacing any unanswered one
///
/// The store is saved after each user's quiz is set and before the prompt is
/// sent, so a failed delivery leaves that user with a saved quiz they never saw.
/// A delivery failure aborts the run for the remaining users.
pub struct QuizDispatchJob {
    store: Arc<dyn UserStore>,
    catalog: Arc<Catalog>,
    messenger: Arc<dyn Messenger>,
}

impl QuizDispatchJob {
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
impl ScheduledJob for QuizDispatchJob {
    fn name(&self) -> &'static str {
        "weekly_quiz"
    }

    async fn run(&self) -> Result<JobReport> {
        let mut users = self.store.load().await;
        let plan = {
            let mut rng = rand::rng();
            plan_quizzes(&self.catalog, &users, &mut rng)
        };
        info!("📝 Dispatching quizzes to {} users", plan.len());

        let mut report = JobReport::default();
        for (user_id, quiz) in plan {
            let prompt = format_quiz_prompt(&quiz);
            if let Some(record) = users.get_mut(&user_id) {
                record.quiz = Some(quiz);
            }
            self.store.save(&users).await?;

            self.messenger
                .send(&user_id, &prompt)
                .await
                .map_err(|e| e.context(format!("quiz delivery to {user_id} failed")))?;
            debug!("Quiz sent to user {user_id}");
            report.delivered += 1;
        }

        Ok(report)
    }
}
