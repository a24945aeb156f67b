use std::sync::Arc;

use crate::{
    constants::FLASHCARD_GENERATION_FAILED_MESSAGE,
    errors::{AppError, AppResult},
    models::domain::FlashcardItem,
    models::dto::generation::GeneratedFlashcardPayload,
    services::curriculum_service::CurriculumStore,
    services::model_service::{response_schema, GenerationBackend, FLASHCARD_SAMPLING},
    services::prompt_composer::compose_flashcard_prompt,
};

/// The flashcard generation pipeline. Same shape as the quiz pipeline minus
/// the exclusion history, plus id stamping on the way out.
pub struct FlashcardService {
    curriculum: Arc<CurriculumStore>,
    backend: Arc<dyn GenerationBackend>,
}

impl FlashcardService {
    pub fn new(curriculum: Arc<CurriculumStore>, backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            curriculum,
            backend,
        }
    }

    /// Generate one card batch. Ids are `{topic}-{difficulty}-{position}`
    /// with the request's raw difficulty string; unknown topics stay
    /// `NotFound`, everything else collapses to the localized failure.
    pub async fn generate_flashcards(
        &self,
        topic: &str,
        difficulty: &str,
    ) -> AppResult<Vec<FlashcardItem>> {
        let curriculum = self
            .curriculum
            .load_topic(topic)
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => err,
                other => collapse_flashcard_failure(other),
            })?;

        let prompt = compose_flashcard_prompt(topic, difficulty, &curriculum);

        let raw = self
            .backend
            .generate(
                &prompt,
                response_schema::<GeneratedFlashcardPayload>(),
                FLASHCARD_SAMPLING,
            )
            .await
            .map_err(collapse_flashcard_failure)?;

        let payload: GeneratedFlashcardPayload =
            serde_json::from_str(&raw).map_err(|err| collapse_flashcard_failure(err.into()))?;

        let cards: Vec<FlashcardItem> = payload
            .flashcards
            .into_iter()
            .enumerate()
            .map(|(position, card)| card.into_item(topic, difficulty, position))
            .collect();

        log::info!(
            "Generated {} flashcards for topic '{}' ({})",
            cards.len(),
            topic,
            difficulty
        );
        Ok(cards)
    }
}

fn collapse_flashcard_failure(err: AppError) -> AppError {
    log::error!("Flashcard generation failed: {}", err);
    AppError::GenerationFailed(FLASHCARD_GENERATION_FAILED_MESSAGE.to_string())
}
