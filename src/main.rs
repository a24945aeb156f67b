use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use leersentrum_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = Arc::new(AppState::new(config).await.map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize application state: {}", err),
        )
    })?);

    log::info!("Starting HTTP server on {}:{}", host, port);

    let app_state = state.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&app_state.config.cors_allowed_origin)
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::get_topics)
            .service(handlers::generate_quiz)
            .service(handlers::generate_flashcards)
            .service(handlers::start_quiz_session)
            .service(handlers::get_quiz_session)
            .service(handlers::submit_answer)
            .service(handlers::delete_quiz_session)
            .service(handlers::get_quiz_progress)
            .service(handlers::start_flashcard_session)
            .service(handlers::get_flashcard_session)
            .service(handlers::flip_card)
            .service(handlers::mark_card)
            .service(handlers::next_card)
            .service(handlers::previous_card)
            .service(handlers::delete_flashcard_session)
            .service(handlers::get_history)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    state.session_service.shutdown().await;
    Ok(())
}
