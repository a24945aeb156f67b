pub mod curriculum_service;
pub mod flashcard_service;
pub mod model_service;
pub mod outcome_service;
pub mod prompt_composer;
pub mod question_history_service;
pub mod quiz_service;
pub mod sampler;
pub mod session_service;

pub use curriculum_service::CurriculumStore;
pub use flashcard_service::FlashcardService;
pub use model_service::{GeminiClient, GenerationBackend};
pub use outcome_service::OutcomeService;
pub use question_history_service::QuestionHistoryService;
pub use quiz_service::QuizService;
pub use session_service::SessionService;
