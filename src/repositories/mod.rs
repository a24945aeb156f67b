pub mod local_store;
pub mod outcome_repository;
pub mod progress_repository;
pub mod question_history_repository;

pub use local_store::LocalKvStore;
pub use outcome_repository::{LocalOutcomeRepository, MongoOutcomeRepository, OutcomeRepository};
pub use progress_repository::{LocalProgressRepository, ProgressRepository};
pub use question_history_repository::{LocalQuestionHistoryRepository, QuestionHistoryRepository};
