// src/utils/grading.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{
    exam_record::{AnswerEntry, GradingResult, QuestionOutcome},
    question::Question,
};

/// Reported when nothing in the submission resolved, instead of NaN.
pub const EMPTY_PERCENTAGE: &str = "0.00";

/// Scores an answer sheet against the current question bank.
///
/// * Entries whose `question_id` is not in `questions` are skipped: they add
///   nothing to the score, the total or the outcome list.
/// * Answers must equal `correct_answer` byte for byte.
/// * Outcomes follow submission order.
pub fn grade(
    student_name: &str,
    answers: &[AnswerEntry],
    questions: &[Question],
    submitted_at: DateTime<Utc>,
) -> GradingResult {
    let by_id: HashMap<u64, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    let mut score: u64 = 0;
    let mut total_marks: u64 = 0;
    let mut results = Vec::with_capacity(answers.len());

    for answer in answers {
        // Unknown or non-numeric ids are dropped on purpose, not reported.
        let Some(question) = answer.question_id.and_then(|id| by_id.get(&id)) else {
            continue;
        };

        total_marks = total_marks.saturating_add(u64::from(question.marks));
        let is_correct = is_correct(&question.correct_answer, &answer.selected_option);
        if is_correct {
            score = score.saturating_add(u64::from(question.marks));
        }

        results.push(QuestionOutcome {
            question_id: question.id,
            question: question.question.clone(),
            selected_option: answer.selected_option.clone(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
            marks: question.marks,
        });
    }

    GradingResult {
        student_name: student_name.to_string(),
        score,
        total_marks,
        percentage: percentage(score, total_marks),
        results,
        submitted_at,
    }
}

/// An empty answer key never matches, even an empty selection.
fn is_correct(correct_answer: &str, selected: &str) -> bool {
    !correct_answer.is_empty() && correct_answer == selected
}

/// `score / total * 100` with two decimals; [`EMPTY_PERCENTAGE`] when `total` is 0.
pub fn percentage(score: u64, total: u64) -> String {
    if total == 0 {
        return EMPTY_PERCENTAGE.to_string();
    }
    to_fixed_2(score as f64 / total as f64 * 100.0)
}

/// Two-decimal formatting that rounds exact halves up.
///
/// `{:.2}` rounds exact ties to even. A double can only sit exactly halfway
/// between two hundredths when it is an odd multiple of 1/8 (x.125, x.375, ...),
/// and `x * 8` is exact, so those are detected and rounded up explicitly.
fn to_fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return format!("{:.2}", (value * 100.0).ceil() / 100.0);
    }
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, marks: u32, correct: &str) -> Question {
        Question {
            id,
            question: format!("{}. Question {}", id, id),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            correct_answer: correct.to_string(),
            marks,
            file_url: None,
            created_at: Utc::now(),
        }
    }

    fn answer(id: u64, selected: &str) -> AnswerEntry {
        AnswerEntry {
            question_id: Some(id),
            selected_option: selected.to_string(),
        }
    }

    #[test]
    fn scores_resolved_answers_in_submission_order() {
        let bank = vec![question(1, 2, "B"), question(2, 3, "A")];
        let sheet = vec![answer(1, "B"), answer(2, "C"), answer(3, "A")];

        let result = grade("alice", &sheet, &bank, Utc::now());

        assert_eq!(result.student_name, "alice");
        assert_eq!(result.score, 2);
        assert_eq!(result.total_marks, 5);
        assert_eq!(result.percentage, "40.00");
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].question_id, 1);
        assert!(result.results[0].is_correct);
        assert_eq!(result.results[1].question_id, 2);
        assert!(!result.results[1].is_correct);
        assert_eq!(result.results[1].selected_option, "C");
        assert_eq!(result.results[1].correct_answer, "A");
        assert_eq!(result.results[1].marks, 3);
    }

    #[test]
    fn outcome_order_follows_the_sheet_not_the_bank() {
        let bank = vec![question(1, 1, "A"), question(2, 1, "A")];
        let sheet = vec![answer(2, "A"), answer(1, "A")];

        let result = grade("bob", &sheet, &bank, Utc::now());
        let ids: Vec<u64> = result.results.iter().map(|o| o.question_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(result.percentage, "100.00");
    }

    #[test]
    fn nothing_resolved_reports_zero_percentage() {
        let bank = vec![question(1, 2, "B")];
        let sheet = vec![answer(9, "B"), answer(10, "A")];

        let result = grade("carol", &sheet, &bank, Utc::now());
        assert_eq!(result.score, 0);
        assert_eq!(result.total_marks, 0);
        assert_eq!(result.percentage, EMPTY_PERCENTAGE);
        assert!(result.results.is_empty());

        let result = grade("carol", &[], &[], Utc::now());
        assert_eq!(result.percentage, "0.00");
    }

    #[test]
    fn comparison_is_exact() {
        let bank = vec![question(1, 1, "B) Rome")];

        for selected in ["b) rome", "B) Rome ", "B)Rome", "B"] {
            let result = grade("dave", &[answer(1, selected)], &bank, Utc::now());
            assert!(!result.results[0].is_correct, "{selected:?} must not match");
        }
        let result = grade("dave", &[answer(1, "B) Rome")], &bank, Utc::now());
        assert!(result.results[0].is_correct);
    }

    #[test]
    fn empty_answer_key_never_matches() {
        let bank = vec![question(1, 1, "")];
        let result = grade("erin", &[answer(1, "")], &bank, Utc::now());
        assert_eq!(result.score, 0);
        assert_eq!(result.total_marks, 1);
        assert!(!result.results[0].is_correct);
    }

    #[test]
    fn repeated_question_counts_each_time() {
        let bank = vec![question(1, 2, "A")];
        let result = grade("frank", &[answer(1, "A"), answer(1, "B")], &bank, Utc::now());
        assert_eq!(result.score, 2);
        assert_eq!(result.total_marks, 4);
        assert_eq!(result.percentage, "50.00");
    }

    #[test]
    fn percentage_rounds_to_two_places() {
        assert_eq!(percentage(1, 3), "33.33");
        assert_eq!(percentage(2, 3), "66.67");
        assert_eq!(percentage(0, 5), "0.00");
        assert_eq!(percentage(1, 8), "12.50");
        assert_eq!(percentage(1, 1600), "0.06");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(percentage(1, 800), "0.13");
        assert_eq!(percentage(3, 800), "0.38");
        assert_eq!(percentage(5, 800), "0.63");
        assert_eq!(percentage(7, 800), "0.88");
        assert_eq!(percentage(801, 800), "100.13");
    }

    #[test]
    fn large_marks_do_not_overflow() {
        let bank = vec![question(1, 3_000_000_000, "A"), question(2, 3_000_000_000, "B")];
        let sheet = vec![answer(1, "A"), answer(2, "B")];

        let result = grade("gina", &sheet, &bank, Utc::now());
        assert_eq!(result.score, 6_000_000_000);
        assert_eq!(result.total_marks, 6_000_000_000);
        assert_eq!(result.percentage, "100.00");
    }

    #[test]
    fn entries_without_a_numeric_id_are_skipped() {
        let bank = vec![question(1, 2, "B")];
        let sheet = vec![
            AnswerEntry {
                question_id: None,
                selected_option: "B".to_string(),
            },
            answer(1, "B"),
        ];

        let result = grade("hank", &sheet, &bank, Utc::now());
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.score, 2);
        assert_eq!(result.total_marks, 2);
    }
}
