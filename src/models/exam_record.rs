// src/models/exam_record.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of a submitted answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    /// `None` when the client sent something that cannot name a question
    /// (a string, a fraction, null...). Such entries are graded as unresolved.
    #[serde(default, deserialize_with = "lenient_question_id")]
    pub question_id: Option<u64>,
    #[serde(default)]
    pub selected_option: String,
}

fn lenient_question_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(question_id_from(&value))
}

/// Only JSON numbers with an integral, non-negative value count; `7.0` is `7`, `"7"` is nothing.
fn question_id_from(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

/// DTO for submitting an exam.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExamRequest {
    /// Free-form, neither required nor unique.
    #[serde(default)]
    pub student_name: String,

    /// Graded in the order given.
    #[serde(default)]
    pub answers: Vec<AnswerEntry>,
}

/// Per-question line of a grading result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOutcome {
    pub question_id: u64,
    pub question: String,
    pub selected_option: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub marks: u32,
}

/// The scored outcome of one submission.
/// Returned by `POST /api/submit-exam` and appended to `exam-results.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub student_name: String,
    pub score: u64,
    /// Sum of marks over the submitted questions that exist, not the whole bank.
    pub total_marks: u64,
    /// Two decimals, e.g. "40.00".
    pub percentage: String,
    pub results: Vec<QuestionOutcome>,
    pub submitted_at: DateTime<Utc>,
}
