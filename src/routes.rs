// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{exam, questions, upload},
    state::AppState,
    utils::uploads::UPLOADS_ROUTE,
};

/// Assembles the main application router.
///
/// * Question bank and exam routes under `/api`.
/// * Upload routes with the configured body limit.
/// * Stored uploads served from `/uploads`.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let upload_routes = Router::new()
        .route("/upload", post(upload::upload_file))
        .route("/parse-file", post(upload::parse_file))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes));

    let api_routes = Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{id}", get(questions::get_question))
        .route("/submit-exam", post(exam::submit_exam))
        .merge(upload_routes);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(UPLOADS_ROUTE, ServeDir::new(&state.config.upload_dir))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
