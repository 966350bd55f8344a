// src/handlers/questions.rs

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, CreateQuestionResponse},
    store::QuestionStore,
};

/// Adds a question to the bank.
///
/// The answer key is stored as given; it is not checked against the options.
pub async fn create_question(
    State(store): State<QuestionStore>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let question = store.append(payload).await?;

    Ok(Json(CreateQuestionResponse {
        message: "Question added successfully".to_string(),
        question,
    }))
}

/// Lists every question in creation order.
pub async fn list_questions(State(store): State<QuestionStore>) -> impl IntoResponse {
    Json(store.list().await)
}

/// Retrieves a single question by ID.
///
/// An id that is not a number cannot match any question, so it is a 404 too.
pub async fn get_question(
    State(store): State<QuestionStore>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|_| AppError::NotFound("Question not found".to_string()))?;
    let question = store.get(id).await?;
    Ok(Json(question))
}
