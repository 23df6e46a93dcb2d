//! # Progress Feature
//!
//! Read-only summary of where a subscriber is in the catalog.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0
//! - **Toggleable**: false

use crate::features::catalog::Catalog;
use crate::store::{QuizState, UserRecord};

pub fn format_progress(catalog: &Catalog, record: Option<&UserRecord>) -> String {
    let Some(record) = record else {
        return "You are not subscribed yet. Use /start to begin!".to_string();
    };

    let total = catalog.batch_count();
    let sent = (record.day as usize).min(total);
    let remaining = total - sent;

    let mut text = format!("📊 *Your Progress*\n\nDigests received: {sent}/{total}\n");
    if remaining == 0 {
        text.push_str("You have seen every abbreviation! 🎓\n");
    } else {
        text.push_str(&format!("Digests remaining: {remaining}\n"));
    }

    match record.quiz_state() {
        QuizState::AwaitingAnswer(_) => {
            text.push_str("Quiz: waiting for your answers\n");
        }
        QuizState::Idle => text.push_str("Quiz: none pending\n"),
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::quiz::Quiz;

    #[test]
    fn test_unknown_user() {
        let text = format_progress(&Catalog::built_in(), None);
        assert!(text.contains("/start"));
    }

    #[test]
    fn test_new_user() {
        let text = format_progress(&Catalog::built_in(), Some(&UserRecord::new()));
        assert!(text.contains("Digests received: 0/2"));
        assert!(text.contains("Digests remaining: 2"));
        assert!(text.contains("none pending"));
    }

    #[test]
    fn test_finished_user_with_quiz() {
        let catalog = Catalog::built_in();
        let record = UserRecord {
            day: 2,
            quiz: Some(Quiz::try_from(catalog.entries()[..5].to_vec()).unwrap()),
        };
        let text = format_progress(&catalog, Some(&record));
        assert!(text.contains("Digests received: 2/2"));
        assert!(text.contains("every abbreviation"));
        assert!(text.contains("waiting for your answers"));
    }
}
