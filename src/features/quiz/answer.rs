//! Quiz answer handling
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use super::{format_score, score_answers};
use crate::core::Messenger;
use crate::store::{QuizState, UserStore};

/// Scores a user's reply against their pending quiz
///
/// A quiz can be answered once: whatever the score, the pending quiz is
/// cleared after the result is sent. Senders with no pending quiz (including
/// unknown senders) are ignored without a reply.
pub struct QuizAnswerHandler {
    store: Arc<dyn UserStore>,
    messenger: Arc<dyn Messenger>,
}

impl QuizAnswerHandler {
    pub fn new(store: Arc<dyn UserStore>, messenger: Arc<dyn Messenger>) -> Self {
        Self { store, messenger }
    }

    /// Returns the score if the message answered a pending quiz
    pub async fn handle(&self, user_id: &str, text: &str) -> Result<Option<usize>> {
        let mut users = self.store.load().await;
        let Some(record) = users.get_mut(user_id) else {
            debug!("Ignoring message from unknown user {user_id}");
            return Ok(None);
        };

        let correct = match record.quiz_state() {
            QuizState::AwaitingAnswer(quiz) => score_answers(quiz, text),
            QuizState::Idle => {
                debug!("Ignoring message from user {user_id} with no pending quiz");
                return Ok(None);
            }
        };

        self.messenger.send(user_id, &format_score(correct)).await?;

        record.quiz = None;
        self.store.save(&users).await?;

        info!("User {user_id} scored {correct}/5 on their quiz");
        Ok(Some(correct))
    }
}
