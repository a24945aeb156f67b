use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::{Config, HistoryBackend},
    db::Database,
    errors::AppResult,
    repositories::{
        LocalOutcomeRepository, LocalProgressRepository, LocalQuestionHistoryRepository,
        MongoOutcomeRepository, OutcomeRepository,
    },
    services::{
        curriculum_service::CurriculumStore, flashcard_service::FlashcardService,
        model_service::GeminiClient, outcome_service::OutcomeService,
        question_history_service::QuestionHistoryService, quiz_service::QuizService,
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub curriculum: Arc<CurriculumStore>,
    pub quiz_service: Arc<QuizService>,
    pub flashcard_service: Arc<FlashcardService>,
    pub session_service: Arc<SessionService>,
    pub outcome_service: Arc<OutcomeService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the full service graph. Only the outcome log is backend-switched;
    /// question history and progress snapshots always live in local files,
    /// and MongoDB is connected only when the outcome backend asks for it.
    pub async fn new(config: Config) -> AppResult<Self> {
        let store_dir = Path::new(&config.local_store_dir);

        let curriculum = Arc::new(CurriculumStore::new(&config.knowledge_base_source));

        let history_repository = Arc::new(LocalQuestionHistoryRepository::new(store_dir));
        let history = Arc::new(QuestionHistoryService::new(history_repository));

        let outcome_repository: Arc<dyn OutcomeRepository> = match config.history_backend {
            HistoryBackend::Mongo => {
                let db = Database::connect(&config).await?;
                let repository = Arc::new(MongoOutcomeRepository::new(&db));
                repository.ensure_indexes().await?;
                repository
            }
            HistoryBackend::Local => Arc::new(LocalOutcomeRepository::new(store_dir)),
        };
        let outcome_service = Arc::new(OutcomeService::new(outcome_repository));

        let progress_repository = Arc::new(LocalProgressRepository::new(store_dir));
        let session_service = Arc::new(SessionService::new(
            outcome_service.clone(),
            progress_repository,
            Duration::from_millis(config.reveal_delay_ms),
        ));

        let backend = Arc::new(GeminiClient::new(&config));
        let quiz_service = Arc::new(QuizService::new(
            curriculum.clone(),
            history,
            backend.clone(),
        ));
        let flashcard_service = Arc::new(FlashcardService::new(curriculum.clone(), backend));

        Ok(Self {
            curriculum,
            quiz_service,
            flashcard_service,
            session_service,
            outcome_service,
            config: Arc::new(config),
        })
    }
}
