pub mod generation;
pub mod request;
pub mod response;

pub use generation::{
    GeneratedFlashcard, GeneratedFlashcardPayload, GeneratedQuizPayload, GeneratedQuizQuestion,
};
pub use request::{
    GenerateFlashcardsRequest, GenerateQuizRequest, MarkCardRequest, StartFlashcardSessionRequest,
    StartQuizSessionRequest, SubmitAnswerRequest,
};
pub use response::{
    FlashcardContentResponse, FlashcardSessionView, HistoryResponse, QuizContentResponse,
    QuizSessionView, TopicsResponse,
};
