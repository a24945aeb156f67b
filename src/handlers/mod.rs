pub mod content_handler;
pub mod history_handler;
pub mod session_handler;

pub use content_handler::{generate_flashcards, generate_quiz, get_topics};
pub use history_handler::{get_history, health_check};
pub use session_handler::{
    delete_flashcard_session, delete_quiz_session, flip_card, get_flashcard_session,
    get_quiz_progress, get_quiz_session, mark_card, next_card, previous_card,
    start_flashcard_session, start_quiz_session, submit_answer,
};
