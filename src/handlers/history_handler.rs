use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, identity::UserIdentity,
    models::dto::response::HistoryResponse,
};

#[get("/api/history")]
pub async fn get_history(
    state: web::Data<Arc<AppState>>,
    identity: UserIdentity,
) -> Result<HttpResponse, AppError> {
    let (quizzes, flashcards) = state.outcome_service.history_for_user(&identity.id).await?;
    Ok(HttpResponse::Ok().json(HistoryResponse {
        quizzes,
        flashcards,
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
