pub mod curriculum;
pub mod difficulty;
pub mod flashcard;
pub mod outcome;
pub mod quiz;
pub mod session;

pub use curriculum::{CurriculumTopic, KnowledgeBase, TopicContent};
pub use difficulty::Difficulty;
pub use flashcard::FlashcardItem;
pub use outcome::{AssessmentOutcome, FlashcardOutcome, QuizOutcome};
pub use quiz::QuizQuestion;
pub use session::{
    CardSide, FlashcardSession, QuizPhase, QuizProgressSnapshot, QuizSession,
};
