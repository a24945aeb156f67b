use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    identity::UserIdentity,
    models::dto::request::{
        MarkCardRequest, StartFlashcardSessionRequest, StartQuizSessionRequest, SubmitAnswerRequest,
    },
    models::dto::response::{FlashcardSessionView, QuizSessionView},
};

#[post("/api/quiz-sessions")]
pub async fn start_quiz_session(
    state: web::Data<Arc<AppState>>,
    request: web::Json<StartQuizSessionRequest>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let request = request.into_inner();
    let session = state
        .session_service
        .start_quiz(&identity.id, &request.topic, request.questions)
        .await;
    Ok(HttpResponse::Created().json(QuizSessionView::from(&session)))
}

#[get("/api/quiz-sessions/{id}")]
pub async fn get_quiz_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .get_quiz_session(id.into_inner(), &identity.id)
        .await?;
    Ok(HttpResponse::Ok().json(QuizSessionView::from(&session)))
}

#[post("/api/quiz-sessions/{id}/answer")]
pub async fn submit_answer(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    request: web::Json<SubmitAnswerRequest>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (session, verdict) = state
        .session_service
        .submit_answer(id.into_inner(), &identity.id, &request.option)
        .await?;
    Ok(HttpResponse::Ok().json(QuizSessionView::from(&session).with_verdict(verdict)))
}

#[actix_web::delete("/api/quiz-sessions/{id}")]
pub async fn delete_quiz_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    state
        .session_service
        .delete_quiz_session(id.into_inner(), &identity.id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Saved mid-quiz position for the authenticated user, `null` when none.
#[get("/api/quiz-progress")]
pub async fn get_quiz_progress(
    state: web::Data<Arc<AppState>>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.quiz_progress(&identity.id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/flashcard-sessions")]
pub async fn start_flashcard_session(
    state: web::Data<Arc<AppState>>,
    request: web::Json<StartFlashcardSessionRequest>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let request = request.into_inner();
    let session = state
        .session_service
        .start_flashcards(&identity.id, &request.topic, &request.difficulty, request.cards)
        .await;
    Ok(HttpResponse::Created().json(FlashcardSessionView::from(&session)))
}

#[get("/api/flashcard-sessions/{id}")]
pub async fn get_flashcard_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .get_flashcard_session(id.into_inner(), &identity.id)
        .await?;
    Ok(HttpResponse::Ok().json(FlashcardSessionView::from(&session)))
}

#[post("/api/flashcard-sessions/{id}/flip")]
pub async fn flip_card(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .flip_card(id.into_inner(), &identity.id)
        .await?;
    Ok(HttpResponse::Ok().json(FlashcardSessionView::from(&session)))
}

#[post("/api/flashcard-sessions/{id}/mark")]
pub async fn mark_card(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    request: web::Json<MarkCardRequest>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .mark_card(id.into_inner(), &identity.id, request.known)
        .await?;
    Ok(HttpResponse::Ok().json(FlashcardSessionView::from(&session)))
}

#[post("/api/flashcard-sessions/{id}/next")]
pub async fn next_card(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .next_card(id.into_inner(), &identity.id)
        .await?;
    Ok(HttpResponse::Ok().json(FlashcardSessionView::from(&session)))
}

#[post("/api/flashcard-sessions/{id}/previous")]
pub async fn previous_card(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .previous_card(id.into_inner(), &identity.id)
        .await?;
    Ok(HttpResponse::Ok().json(FlashcardSessionView::from(&session)))
}

#[actix_web::delete("/api/flashcard-sessions/{id}")]
pub async fn delete_flashcard_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    state
        .session_service
        .delete_flashcard_session(id.into_inner(), &identity.id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
