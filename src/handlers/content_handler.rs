use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    identity::UserIdentity,
    models::dto::request::{GenerateFlashcardsRequest, GenerateQuizRequest},
    models::dto::response::{FlashcardContentResponse, QuizContentResponse, TopicsResponse},
};

#[get("/api/topics")]
pub async fn get_topics(
    state: web::Data<Arc<AppState>>,
    _identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let topics = state.curriculum.topics().await?;
    Ok(HttpResponse::Ok().json(TopicsResponse { topics }))
}

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuizRequest>,
    _identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let questions = state
        .quiz_service
        .generate_quiz(&request.topic, &request.difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(QuizContentResponse { questions }))
}

#[post("/api/flashcards/generate")]
pub async fn generate_flashcards(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateFlashcardsRequest>,
    _identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let flashcards = state
        .flashcard_service
        .generate_flashcards(&request.topic, &request.difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(FlashcardContentResponse { flashcards }))
}
