use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::{FlashcardItem, QuizQuestion};

/// The exact JSON the generation service is asked to return for a quiz.
/// The derived schema is sent along as the structured-output constraint, and
/// the parse back through this type is the whole shape check: a response
/// without a `questions` array fails here and nowhere else.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuizPayload {
    pub questions: Vec<GeneratedQuizQuestion>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl From<GeneratedQuizQuestion> for QuizQuestion {
    fn from(generated: GeneratedQuizQuestion) -> Self {
        QuizQuestion {
            question: generated.question,
            options: generated.options,
            correct_answer: generated.correct_answer,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedFlashcardPayload {
    pub flashcards: Vec<GeneratedFlashcard>,
}

/// The model only authors the two faces; id, topic and difficulty are
/// stamped on afterwards.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedFlashcard {
    pub front: String,
    pub back: String,
}

impl GeneratedFlashcard {
    pub fn into_item(self, topic: &str, difficulty: &str, position: usize) -> FlashcardItem {
        FlashcardItem {
            id: FlashcardItem::batch_id(topic, difficulty, position),
            front: self.front,
            back: self.back,
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}
