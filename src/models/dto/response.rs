use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{
    CardSide, FlashcardItem, FlashcardOutcome, FlashcardSession, QuizOutcome, QuizPhase,
    QuizQuestion, QuizSession,
};

#[derive(Debug, Clone, Serialize)]
pub struct QuizContentResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardContentResponse {
    pub flashcards: Vec<FlashcardItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSessionView {
    pub id: Uuid,
    pub topic: String,
    pub phase: QuizPhase,
    pub question_index: usize,
    pub total_questions: usize,
    pub score: u32,
    pub current_question: Option<QuizQuestion>,
    /// Verdict for the answer submitted in this request, when there was one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_answer_correct: Option<bool>,
}

impl From<&QuizSession> for QuizSessionView {
    fn from(session: &QuizSession) -> Self {
        QuizSessionView {
            id: session.id,
            topic: session.topic.clone(),
            phase: session.phase,
            question_index: session.current_index,
            total_questions: session.questions.len(),
            score: session.score,
            current_question: session.current_question().cloned(),
            last_answer_correct: None,
        }
    }
}

impl QuizSessionView {
    pub fn with_verdict(mut self, verdict: Option<bool>) -> Self {
        self.last_answer_correct = verdict;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSessionView {
    pub id: Uuid,
    pub topic: String,
    pub difficulty: String,
    pub card_index: usize,
    pub total_cards: usize,
    pub side: CardSide,
    pub complete: bool,
    pub known_count: usize,
    pub unknown_count: usize,
    pub current_card: Option<FlashcardItem>,
}

impl From<&FlashcardSession> for FlashcardSessionView {
    fn from(session: &FlashcardSession) -> Self {
        FlashcardSessionView {
            id: session.id,
            topic: session.topic.clone(),
            difficulty: session.difficulty.clone(),
            card_index: session.current_index,
            total_cards: session.cards.len(),
            side: session.side,
            complete: session.complete,
            known_count: session.known.len(),
            unknown_count: session.unknown.len(),
            current_card: session.current_card().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub quizzes: Vec<QuizOutcome>,
    pub flashcards: Vec<FlashcardOutcome>,
}
