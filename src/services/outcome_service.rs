use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::{AssessmentOutcome, FlashcardOutcome, QuizOutcome};
use crate::repositories::OutcomeRepository;

/// Records finished runs and serves the learner's history. Appends are
/// best-effort: a storage failure is logged and swallowed so completing a
/// run never errors out of the learner's flow.
pub struct OutcomeService {
    repository: Arc<dyn OutcomeRepository>,
}

impl OutcomeService {
    pub fn new(repository: Arc<dyn OutcomeRepository>) -> Self {
        Self { repository }
    }

    pub async fn record_quiz_outcome(&self, outcome: QuizOutcome) {
        if let Err(err) = self
            .repository
            .append(AssessmentOutcome::Quiz(outcome))
            .await
        {
            log::error!("Failed to record quiz outcome: {}", err);
        }
    }

    pub async fn record_flashcard_outcome(&self, outcome: FlashcardOutcome) {
        if let Err(err) = self
            .repository
            .append(AssessmentOutcome::Flashcard(outcome))
            .await
        {
            log::error!("Failed to record flashcard outcome: {}", err);
        }
    }

    /// The user's finished runs split by kind, each list newest first.
    pub async fn history_for_user(
        &self,
        user_id: &str,
    ) -> AppResult<(Vec<QuizOutcome>, Vec<FlashcardOutcome>)> {
        let outcomes = self.repository.query_by_user(user_id).await?;

        let mut quizzes = Vec::new();
        let mut flashcards = Vec::new();
        for outcome in outcomes {
            match outcome {
                AssessmentOutcome::Quiz(outcome) => quizzes.push(outcome),
                AssessmentOutcome::Flashcard(outcome) => flashcards.push(outcome),
            }
        }
        Ok((quizzes, flashcards))
    }
}
