// src/utils/parser.rs

//! Line-oriented extraction of multiple-choice questions from plain text.
//!
//! Recognized lines (after trimming):
//!
//! * `12.` / `12)` prefix: starts a new question, kept verbatim.
//! * `A.` .. `D)` prefix: an option of the open question.
//! * `answer:` prefix (any case): the open question's correct answer.
//!
//! Everything else is skipped. Question text cannot span lines.

use std::str::Split;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::upload::ParsedQuestion;

static QUESTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]").expect("valid question pattern"));

static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-D][.)]").expect("valid option pattern"));

const ANSWER_PREFIX: &str = "answer:";

/// Single-pass iterator over the candidate questions in `content`, in source order.
pub fn parse_questions(content: &str) -> CandidateQuestions<'_> {
    CandidateQuestions {
        lines: content.split('\n'),
        current: None,
    }
}

/// See [`parse_questions`].
pub struct CandidateQuestions<'a> {
    lines: Split<'a, char>,
    current: Option<ParsedQuestion>,
}

impl Iterator for CandidateQuestions<'_> {
    type Item = ParsedQuestion;

    fn next(&mut self) -> Option<ParsedQuestion> {
        for line in self.lines.by_ref() {
            let line = line.trim_matches(is_js_whitespace);

            if QUESTION_LINE.is_match(line) {
                let started = ParsedQuestion {
                    question: line.to_string(),
                    ..Default::default()
                };
                if let Some(done) = self.current.replace(started) {
                    return Some(done);
                }
            } else if OPTION_LINE.is_match(line) {
                // Options before the first numbered line have no owner and are dropped.
                if let Some(current) = self.current.as_mut() {
                    current.options.push(line.to_string());
                }
            } else if line.to_lowercase().starts_with(ANSWER_PREFIX) {
                if let Some(current) = self.current.as_mut() {
                    current.correct_answer = answer_value(line);
                }
            }
        }

        self.current.take()
    }
}

/// Whitespace as JavaScript's `String.prototype.trim` sees it: Unicode
/// `White_Space` plus the byte-order mark, minus U+0085.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Text between the first and second colon, trimmed. `Answer: B: Rome` yields `B`.
fn answer_value(line: &str) -> String {
    line.split(':')
        .nth(1)
        .unwrap_or_default()
        .trim_matches(is_js_whitespace)
        .to_string()
}
