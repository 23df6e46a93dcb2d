//! # Quiz Feature
//!
//! Weekly five-question quiz. Dispatch draws five distinct catalog entries per
//! user and stores them as the pending quiz; the answer handler scores the
//! user's next direct message against it and clears it.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Fixed-size quiz type, pure planning and scoring functions
//! - 1.1.0: Scores reported back to the user
//! - 1.0.0: Weekly dispatch

pub mod answer;
pub mod dispatch;

pub use answer::QuizAnswerHandler;
pub use dispatch::QuizDispatchJob;

use anyhow::Result;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::features::catalog::{Abbreviation, Catalog, BATCH_SIZE};
use crate::store::UserMap;

/// Number of questions per quiz
pub const QUIZ_LEN: usize = BATCH_SIZE;

/// Exactly [`QUIZ_LEN`] distinct entries, in presentation (and answer-key) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz([Abbreviation; QUIZ_LEN]);

impl Quiz {
    /// Draw entries uniformly at random without replacement
    pub fn draw<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Self {
        let picks = index::sample(rng, catalog.len(), QUIZ_LEN);
        Quiz(std::array::from_fn(|n| {
            catalog.entries()[picks.index(n)].clone()
        }))
    }

    pub fn entries(&self) -> &[Abbreviation] {
        &self.0
    }
}

impl TryFrom<Vec<Abbreviation>> for Quiz {
    type Error = anyhow::Error;

    fn try_from(entries: Vec<Abbreviation>) -> Result<Self> {
        let len = entries.len();
        let entries: [Abbreviation; QUIZ_LEN] = entries
            .try_into()
            .map_err(|_| anyhow::anyhow!("A quiz needs exactly {QUIZ_LEN} entries, got {len}"))?;
        Ok(Quiz(entries))
    }
}

/// Prompt listing the codes only, expansions withheld
pub fn format_quiz_prompt(quiz: &Quiz) -> String {
    let mut text = String::from("📝 *Weekly Quiz!* What do these stand for?\n\n");
    for (i, entry) in quiz.entries().iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, entry.code));
    }
    text.push_str("\nReply like this:\n1:..., 2:..., 3:..., 4:..., 5:...");
    text
}

pub fn format_score(correct: usize) -> String {
    format!("Your quiz score is: {correct}/5 🎉")
}

/// Score a free-text reply against a quiz
///
/// The reply is split on commas. Part `i` is checked against quiz entry `i`,
/// whatever number the user typed in front of the colon. Parts without a
/// colon, and parts past the last question, score nothing. The answer is the
/// text between the first colon and the next one (or the end of the part); it
/// counts when, trimmed and lower-cased, it is a substring of the lower-cased
/// expansion.
pub fn score_answers(quiz: &Quiz, reply: &str) -> usize {
    reply
        .split(',')
        .zip(quiz.entries())
        .filter_map(|(part, entry)| {
            let answer = part.split(':').nth(1)?;
            Some((answer.trim().to_lowercase(), entry))
        })
        .filter(|(answer, entry)| entry.expansion.to_lowercase().contains(answer.as_str()))
        .count()
}

/// Draw a fresh quiz for every user in the snapshot, in store order
pub fn plan_quizzes<R: Rng + ?Sized>(
    catalog: &Catalog,
    users: &UserMap,
    rng: &mut R,
) -> Vec<(String, Quiz)> {
    users
        .keys()
        .map(|user_id| (user_id.clone(), Quiz::draw(catalog, &mut *rng)))
        .collect()
}
