use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finished quiz run. Append-only once written, never updated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub user_id: String,
    pub topic: String,
    pub score: u32,
    pub total_questions: u32,
    pub date: DateTime<Utc>,
}

/// A finished flashcard run with its known/unknown tallies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardOutcome {
    pub user_id: String,
    pub topic: String,
    pub difficulty: String,
    pub total_cards: u32,
    pub known_cards: u32,
    pub unknown_cards: u32,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AssessmentOutcome {
    Quiz(QuizOutcome),
    Flashcard(FlashcardOutcome),
}

impl AssessmentOutcome {
    pub fn user_id(&self) -> &str {
        match self {
            AssessmentOutcome::Quiz(outcome) => &outcome.user_id,
            AssessmentOutcome::Flashcard(outcome) => &outcome.user_id,
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        match self {
            AssessmentOutcome::Quiz(outcome) => outcome.date,
            AssessmentOutcome::Flashcard(outcome) => outcome.date,
        }
    }
}
