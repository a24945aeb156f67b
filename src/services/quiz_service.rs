use std::sync::Arc;

use crate::{
    constants::QUIZ_GENERATION_FAILED_MESSAGE,
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
    models::dto::generation::GeneratedQuizPayload,
    services::curriculum_service::CurriculumStore,
    services::model_service::{response_schema, GenerationBackend, QUIZ_SAMPLING},
    services::prompt_composer::compose_quiz_prompt,
    services::question_history_service::QuestionHistoryService,
};

/// The quiz generation pipeline: curriculum sample, exclusion history, prompt
/// composition, the model call, the shape check, and the history write.
pub struct QuizService {
    curriculum: Arc<CurriculumStore>,
    history: Arc<QuestionHistoryService>,
    backend: Arc<dyn GenerationBackend>,
}

impl QuizService {
    pub fn new(
        curriculum: Arc<CurriculumStore>,
        history: Arc<QuestionHistoryService>,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        Self {
            curriculum,
            history,
            backend,
        }
    }

    /// Generate one batch of questions. An unknown topic stays `NotFound` --
    /// the learner picks another topic, no retry. Every other failure reaches
    /// the caller as one localized `GenerationFailed`, with the real cause in
    /// the log. The question texts are recorded to history only after a
    /// successful parse, and a failed history write never fails the
    /// generation.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        difficulty: &str,
    ) -> AppResult<Vec<QuizQuestion>> {
        let curriculum = self
            .curriculum
            .load_topic(topic)
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => err,
                other => collapse_quiz_failure(other),
            })?;

        let exclusions = match self.history.exclusions_for(topic).await {
            Ok(exclusions) => exclusions,
            Err(err) => {
                log::warn!("Question history unavailable for '{}': {}", topic, err);
                Vec::new()
            }
        };

        let prompt = compose_quiz_prompt(topic, difficulty, &curriculum, &exclusions);

        let raw = self
            .backend
            .generate(&prompt, response_schema::<GeneratedQuizPayload>(), QUIZ_SAMPLING)
            .await
            .map_err(collapse_quiz_failure)?;

        let payload: GeneratedQuizPayload =
            serde_json::from_str(&raw).map_err(|err| collapse_quiz_failure(err.into()))?;

        let questions: Vec<QuizQuestion> = payload
            .questions
            .into_iter()
            .map(QuizQuestion::from)
            .collect();

        let texts: Vec<String> = questions
            .iter()
            .map(|question| question.question.clone())
            .collect();
        if let Err(err) = self.history.record_questions(topic, &texts).await {
            log::warn!("Failed to record question history for '{}': {}", topic, err);
        }

        log::info!(
            "Generated {} quiz questions for topic '{}' ({})",
            questions.len(),
            topic,
            difficulty
        );
        Ok(questions)
    }
}

fn collapse_quiz_failure(err: AppError) -> AppError {
    log::error!("Quiz generation failed: {}", err);
    AppError::GenerationFailed(QUIZ_GENERATION_FAILED_MESSAGE.to_string())
}
