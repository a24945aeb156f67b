use once_cell::sync::Lazy;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{FlashcardItem, QuizQuestion};

static TOPIC_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[\p{L}\p{N}' -]+$").expect("TOPIC_REGEX is a valid regex pattern")
});

/// Difficulty is deliberately a raw string, not the enum: unrecognized values
/// still generate (the composer falls back to its base prompt) and ride along
/// into flashcard ids unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(
        length(min = 1, max = 100),
        regex(path = *TOPIC_REGEX, message = "Topic may only contain letters, digits, spaces, apostrophes and hyphens")
    )]
    pub topic: String,

    #[validate(length(min = 1, max = 50))]
    pub difficulty: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFlashcardsRequest {
    #[validate(
        length(min = 1, max = 100),
        regex(path = *TOPIC_REGEX, message = "Topic may only contain letters, digits, spaces, apostrophes and hyphens")
    )]
    pub topic: String,

    #[validate(length(min = 1, max = 50))]
    pub difficulty: String,
}

/// The frontend hands the generated question list back to open a run, so the
/// session layer never re-calls the generation service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartQuizSessionRequest {
    #[validate(length(min = 1, max = 100))]
    pub topic: String,

    #[validate(length(min = 1, max = 50))]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, max = 500))]
    pub option: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartFlashcardSessionRequest {
    #[validate(length(min = 1, max = 100))]
    pub topic: String,

    #[validate(length(min = 1, max = 50))]
    pub difficulty: String,

    #[validate(length(min = 1, max = 50))]
    pub cards: Vec<FlashcardItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkCardRequest {
    pub known: bool,
}
