// src/handlers/exam.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::exam_record::SubmitExamRequest,
    store::{QuestionStore, ResultLog},
    utils::{clock, grading::grade},
};

/// Grades a submitted answer sheet and records the result.
///
/// * Answers referencing unknown questions are ignored.
/// * The result is only returned once it has been written to the log.
pub async fn submit_exam(
    State(questions): State<QuestionStore>,
    State(results): State<ResultLog>,
    req: Result<Json<SubmitExamRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = req?;
    let bank = questions.list().await;
    let result = grade(&req.student_name, &req.answers, &bank, clock::now());

    results.append(&result).await?;

    Ok(Json(result))
}
