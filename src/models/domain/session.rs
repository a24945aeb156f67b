use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::domain::flashcard::FlashcardItem;
use crate::models::domain::outcome::{FlashcardOutcome, QuizOutcome};
use crate::models::domain::quiz::QuizQuestion;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuizPhase {
    AwaitingAnswer,
    Revealed,
    Complete,
}

/// One learner's run through a generated question list. Transitions are
/// synchronous; the reveal-to-next delay lives in the session service, which
/// calls `advance` when the timer fires.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub user_id: String,
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub answers: Vec<String>,
    pub score: u32,
    pub phase: QuizPhase,
}

impl QuizSession {
    pub fn new(user_id: &str, topic: &str, questions: Vec<QuizQuestion>) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Complete
        } else {
            QuizPhase::AwaitingAnswer
        };
        QuizSession {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            questions,
            current_index: 0,
            answers: Vec::new(),
            score: 0,
            phase,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// Lock in an answer for the current question. Scores one point on an
    /// exact string match against `correct_answer`. Returns the verdict, or
    /// `None` when the answer is already revealed or the run is complete --
    /// a second click changes nothing.
    pub fn select_answer(&mut self, option: &str) -> Option<bool> {
        if self.phase != QuizPhase::AwaitingAnswer {
            return None;
        }
        let correct = self
            .current_question()
            .map(|question| question.correct_answer == option)
            .unwrap_or(false);
        self.answers.push(option.to_string());
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealed;
        Some(correct)
    }

    /// Move off a revealed answer: next question, or `Complete` after the
    /// last one. A no-op in any other phase.
    pub fn advance(&mut self) {
        if self.phase != QuizPhase::Revealed {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.phase = QuizPhase::AwaitingAnswer;
        } else {
            self.phase = QuizPhase::Complete;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn snapshot(&self) -> QuizProgressSnapshot {
        QuizProgressSnapshot {
            topic: self.topic.clone(),
            question_index: self.current_index,
            answers: self.answers.clone(),
            score: self.score,
            timestamp: Utc::now(),
        }
    }

    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome {
            user_id: self.user_id.clone(),
            topic: self.topic.clone(),
            score: self.score,
            total_questions: self.questions.len() as u32,
            date: Utc::now(),
        }
    }
}

/// Mid-run quiz position, written after every transition and cleared on
/// completion so an interrupted run can be offered for resume.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgressSnapshot {
    pub topic: String,
    pub question_index: usize,
    pub answers: Vec<String>,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum CardSide {
    Front,
    Back,
}

/// One learner's run through a flashcard batch. Flipping is free and
/// reversible; marking known/unknown is only accepted with the back showing
/// and advances to the next card's front. Tallies are id sets, so marking a
/// revisited card the same way again cannot inflate the count.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardSession {
    pub id: Uuid,
    pub user_id: String,
    pub topic: String,
    pub difficulty: String,
    pub cards: Vec<FlashcardItem>,
    pub current_index: usize,
    pub side: CardSide,
    pub known: HashSet<String>,
    pub unknown: HashSet<String>,
    pub complete: bool,
}

impl FlashcardSession {
    pub fn new(user_id: &str, topic: &str, difficulty: &str, cards: Vec<FlashcardItem>) -> Self {
        let complete = cards.is_empty();
        FlashcardSession {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
            cards,
            current_index: 0,
            side: CardSide::Front,
            known: HashSet::new(),
            unknown: HashSet::new(),
            complete,
        }
    }

    pub fn current_card(&self) -> Option<&FlashcardItem> {
        self.cards.get(self.current_index)
    }

    /// Turn the current card over (either direction). No tally effect.
    pub fn flip(&mut self) {
        if self.complete {
            return;
        }
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    /// Record the current card as known or unknown, then advance. Rejected
    /// (returns false) while the front is showing or after completion.
    pub fn mark(&mut self, known: bool) -> bool {
        if self.complete || self.side != CardSide::Back {
            return false;
        }
        if let Some(card) = self.current_card() {
            let id = card.id.clone();
            if known {
                self.known.insert(id);
            } else {
                self.unknown.insert(id);
            }
        }
        if self.current_index + 1 < self.cards.len() {
            self.current_index += 1;
            self.side = CardSide::Front;
        } else {
            self.complete = true;
        }
        true
    }

    /// Free forward navigation without marking. Stops at the last card.
    pub fn next(&mut self) {
        if self.complete {
            return;
        }
        if self.current_index + 1 < self.cards.len() {
            self.current_index += 1;
            self.side = CardSide::Front;
        }
    }

    /// Free backward navigation without marking. Stops at the first card.
    pub fn previous(&mut self) {
        if self.complete {
            return;
        }
        if self.current_index > 0 {
            self.current_index -= 1;
            self.side = CardSide::Front;
        }
    }

    pub fn outcome(&self) -> FlashcardOutcome {
        FlashcardOutcome {
            user_id: self.user_id.clone(),
            topic: self.topic.clone(),
            difficulty: self.difficulty.clone(),
            total_cards: self.cards.len() as u32,
            known_cards: self.known.len() as u32,
            unknown_cards: self.unknown.len() as u32,
            date: Utc::now(),
        }
    }
}
