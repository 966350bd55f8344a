// src/models/upload.rs

use serde::{Deserialize, Serialize};

/// A question candidate extracted from uploaded text, not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Empty when the source had no `Answer:` line.
    pub correct_answer: String,
}

/// Response body of `POST /api/upload`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub originalname: String,
    pub path: String,
}

/// Response body of `POST /api/parse-file`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseFileResponse {
    pub message: String,
    pub questions: Vec<ParsedQuestion>,
    pub file_url: String,
}
