// src/models/question.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Marks awarded for a question created without an explicit (non-zero) value.
pub const DEFAULT_MARKS: u32 = 1;

/// Upper bound accepted for `marks` on creation.
pub const MAX_MARKS: u32 = 1_000_000;

/// A committed question, as stored in `questions.json` and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Assigned by the store, never reused.
    pub id: u64,

    /// The question text, numbering included when it came from the parser.
    pub question: String,

    /// Option lines in display order (e.g., ["A) Paris", "B) Rome"]).
    #[serde(default)]
    pub options: Vec<String>,

    /// Compared verbatim against a submitted option. Empty never matches.
    #[serde(default)]
    pub correct_answer: String,

    pub marks: u32,

    /// Public path of the upload this question was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new question.
///
/// Only sizes are checked. Whether `correct_answer` names one of the
/// `options` is deliberately left to the operator.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(max = 5000))]
    pub question: String,
    #[serde(default)]
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub correct_answer: String,
    /// Whole marks only; fractions are rejected when the body is decoded.
    #[validate(range(max = MAX_MARKS))]
    pub marks: Option<u32>,
    #[validate(length(max = 1000))]
    pub file_url: Option<String>,
}

impl CreateQuestionRequest {
    /// Missing and zero marks both fall back to [`DEFAULT_MARKS`].
    pub fn effective_marks(&self) -> u32 {
        self.marks.filter(|m| *m > 0).unwrap_or(DEFAULT_MARKS)
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() > 26 {
        return Err(validator::ValidationError::new("too_many_options"));
    }
    for opt in options {
        if opt.len() > 1000 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}

/// Response body of `POST /api/questions`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    pub message: String,
    pub question: Question,
}
