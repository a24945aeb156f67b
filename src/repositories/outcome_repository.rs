use std::path::Path;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::errors::AppResult;
use crate::models::domain::{AssessmentOutcome, FlashcardOutcome, QuizOutcome};
use crate::repositories::local_store::LocalKvStore;

/// Append-only log of finished quiz and flashcard runs.
#[async_trait]
pub trait OutcomeRepository: Send + Sync {
    async fn append(&self, outcome: AssessmentOutcome) -> AppResult<()>;
    /// Everything the user has finished, newest first across both kinds.
    async fn query_by_user(&self, user_id: &str) -> AppResult<Vec<AssessmentOutcome>>;
}

pub struct MongoOutcomeRepository {
    quiz_outcomes: Collection<QuizOutcome>,
    flashcard_outcomes: Collection<FlashcardOutcome>,
}

impl MongoOutcomeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            quiz_outcomes: db.get_collection("quiz_outcomes"),
            flashcard_outcomes: db.get_collection("flashcard_outcomes"),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for outcome collections");

        let quiz_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "date": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_date".to_string())
                    .build(),
            )
            .build();
        let flashcard_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "date": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_date".to_string())
                    .build(),
            )
            .build();

        self.quiz_outcomes.create_index(quiz_index).await?;
        self.flashcard_outcomes.create_index(flashcard_index).await?;

        log::info!("Successfully created indexes for outcome collections");
        Ok(())
    }
}

#[async_trait]
impl OutcomeRepository for MongoOutcomeRepository {
    async fn append(&self, outcome: AssessmentOutcome) -> AppResult<()> {
        match outcome {
            AssessmentOutcome::Quiz(outcome) => {
                self.quiz_outcomes.insert_one(&outcome).await?;
            }
            AssessmentOutcome::Flashcard(outcome) => {
                self.flashcard_outcomes.insert_one(&outcome).await?;
            }
        }
        Ok(())
    }

    async fn query_by_user(&self, user_id: &str) -> AppResult<Vec<AssessmentOutcome>> {
        let quizzes: Vec<QuizOutcome> = self
            .quiz_outcomes
            .find(doc! { "userId": user_id })
            .sort(doc! { "date": -1 })
            .await?
            .try_collect()
            .await?;

        let flashcards: Vec<FlashcardOutcome> = self
            .flashcard_outcomes
            .find(doc! { "userId": user_id })
            .sort(doc! { "date": -1 })
            .await?
            .try_collect()
            .await?;

        let mut merged: Vec<AssessmentOutcome> = quizzes
            .into_iter()
            .map(AssessmentOutcome::Quiz)
            .chain(flashcards.into_iter().map(AssessmentOutcome::Flashcard))
            .collect();
        merged.sort_by(|a, b| b.date().cmp(&a.date()));
        Ok(merged)
    }
}

#[derive(Default, Deserialize, Serialize)]
struct OutcomeDocument {
    quizzes: Vec<QuizOutcome>,
    flashcards: Vec<FlashcardOutcome>,
}

pub struct LocalOutcomeRepository {
    store: LocalKvStore,
}

impl LocalOutcomeRepository {
    pub fn new(dir: &Path) -> Self {
        Self {
            store: LocalKvStore::new(dir, "outcomes.json"),
        }
    }
}

#[async_trait]
impl OutcomeRepository for LocalOutcomeRepository {
    async fn append(&self, outcome: AssessmentOutcome) -> AppResult<()> {
        self.store
            .modify(move |document: &mut OutcomeDocument| match outcome {
                AssessmentOutcome::Quiz(outcome) => document.quizzes.push(outcome),
                AssessmentOutcome::Flashcard(outcome) => document.flashcards.push(outcome),
            })
            .await
    }

    async fn query_by_user(&self, user_id: &str) -> AppResult<Vec<AssessmentOutcome>> {
        let document: OutcomeDocument = self.store.read().await?;

        let mut merged: Vec<AssessmentOutcome> = document
            .quizzes
            .into_iter()
            .filter(|outcome| outcome.user_id == user_id)
            .map(AssessmentOutcome::Quiz)
            .chain(
                document
                    .flashcards
                    .into_iter()
                    .filter(|outcome| outcome.user_id == user_id)
                    .map(AssessmentOutcome::Flashcard),
            )
            .collect();
        merged.sort_by(|a, b| b.date().cmp(&a.date()));
        Ok(merged)
    }
}
