// src/handlers/upload.rs

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    response::IntoResponse,
};

use crate::{
    config::Config,
    error::AppError,
    models::upload::{ParseFileResponse, UploadResponse},
    utils::{
        parser::parse_questions,
        uploads::{StoredUpload, store_upload},
    },
};

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Stores the `file` field of a multipart body in the upload directory.
///
/// A non-multipart body and a body without a `file` field are both
/// rejected before anything is written.
async fn receive_file(
    config: &Config,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<StoredUpload, AppError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("Rejected upload body: {}", e);
        AppError::BadRequest("No file uploaded".to_string())
    })?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await?;

        return store_upload(&config.upload_dir, &original_name, bytes.to_vec()).await;
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

/// Accepts any file and reports where it is served from.
pub async fn upload_file(
    State(config): State<Config>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let stored = receive_file(&config, multipart).await?;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        path: stored.public_path(),
        filename: stored.filename,
        originalname: stored.original_name,
    }))
}

/// Stores a text file and extracts question candidates from it.
///
/// Nothing is committed to the question bank; the operator creates the
/// questions they want through `POST /api/questions`.
pub async fn parse_file(
    State(config): State<Config>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let stored = receive_file(&config, multipart).await?;

    let questions: Vec<_> = parse_questions(&stored.text()).collect();
    tracing::info!(
        "Parsed {} candidate questions from {}",
        questions.len(),
        stored.filename
    );

    Ok(Json(ParseFileResponse {
        message: "File parsed successfully".to_string(),
        questions,
        file_url: stored.public_path(),
    }))
}
