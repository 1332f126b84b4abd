//! Answer key resolution
//!
//! Correct answers come back from the generator as an option index ("1"),
//! as the literal option text ("Queue"), or as free text. The answer key
//! always shows a readable string; resolution never fails.

use crate::{Question, QuestionKind};
use serde::{Deserialize, Serialize};

/// Shown when a question carries no usable correct answer
pub const ANSWER_FALLBACK: &str = "Check instructor guide";

/// Letter label for an option index: 0 -> 'A', 1 -> 'B', ...
pub fn option_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add('A' as u32))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

/// Resolve the display string for a question's correct answer
pub fn resolve_answer(
    kind: QuestionKind,
    options: &[String],
    correct_answer: Option<&str>,
) -> String {
    let verbatim = || correct_answer.unwrap_or(ANSWER_FALLBACK).to_string();

    if kind != QuestionKind::Mcq || options.is_empty() {
        return verbatim();
    }

    let Some(answer) = correct_answer else {
        return ANSWER_FALLBACK.to_string();
    };

    if let Some(idx) = parse_index(answer).filter(|&idx| idx < options.len()) {
        return format!("{}) {}", option_letter(idx), options[idx]);
    }

    if let Some(idx) = options.iter().position(|opt| opt == answer) {
        return format!("{}) {}", option_letter(idx), answer);
    }

    verbatim()
}

/// Integer index parse; negative, fractional, or empty strings are not indices
fn parse_index(answer: &str) -> Option<usize> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<usize>().ok()
}

/// One row of the answer key table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyRow {
    /// "Q{n}" in original input order
    pub ordinal: String,
    /// Raw type label (empty when absent)
    pub type_label: String,
    /// Resolved answer display string
    pub answer: String,
    /// Marks as text
    pub marks: String,
}

impl AnswerKeyRow {
    /// Build the row for the question at `index` (0-based input position)
    pub fn for_question(index: usize, question: &Question) -> Self {
        Self {
            ordinal: format!("Q{}", index + 1),
            type_label: question.type_label.clone().unwrap_or_default(),
            answer: resolve_answer(
                question.kind,
                &question.options,
                question.correct_answer.as_deref(),
            ),
            marks: question.answer_key_marks(),
        }
    }

    /// Cells in column order
    pub fn cells(&self) -> [&str; 4] {
        [&self.ordinal, &self.type_label, &self.answer, &self.marks]
    }
}

/// Build the answer key for a question list, in input order
pub fn build_answer_key(questions: &[Question]) -> Vec<AnswerKeyRow> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| AnswerKeyRow::for_question(i, q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_numeric_index() {
        let options = opts(&["3", "4", "5"]);
        assert_eq!(resolve_answer(QuestionKind::Mcq, &options, Some("1")), "B) 4");
    }

    #[test]
    fn test_literal_text_match() {
        let options = opts(&["Stack", "Queue", "Tree", "Graph"]);
        assert_eq!(
            resolve_answer(QuestionKind::Mcq, &options, Some("Queue")),
            "B) Queue"
        );
    }

    #[test]
    fn test_out_of_range_index_is_not_an_index() {
        let options = opts(&["1"]);
        // "1" is out of range for one option, but it matches option text
        assert_eq!(resolve_answer(QuestionKind::Mcq, &options, Some("1")), "A) 1");

        let options = opts(&["Yes"]);
        assert_eq!(resolve_answer(QuestionKind::Mcq, &options, Some("1")), "1");
    }

    #[test]
    fn test_absent_answer() {
        let options = opts(&["A", "B"]);
        assert_eq!(resolve_answer(QuestionKind::Mcq, &options, None), ANSWER_FALLBACK);
        assert_eq!(resolve_answer(QuestionKind::Other, &[], None), ANSWER_FALLBACK);
    }

    #[test]
    fn test_descriptive_verbatim() {
        assert_eq!(
            resolve_answer(QuestionKind::Other, &opts(&["x"]), Some("0")),
            "0"
        );
    }

    #[test]
    fn test_mcq_without_options_verbatim() {
        assert_eq!(resolve_answer(QuestionKind::Mcq, &[], Some("2")), "2");
    }

    #[test]
    fn test_negative_and_fractional() {
        let options = opts(&["a", "b"]);
        assert_eq!(resolve_answer(QuestionKind::Mcq, &options, Some("-1")), "-1");
        assert_eq!(resolve_answer(QuestionKind::Mcq, &options, Some("1.5")), "1.5");
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(25), 'Z');
    }

    #[test]
    fn test_answer_key_rows_in_input_order() {
        let questions = vec![
            Question::new("Explain", "Essay").with_marks(10.0),
            Question::new("2+2", "MCQ")
                .with_marks(2.0)
                .with_options(["3", "4"])
                .with_correct_answer("1"),
        ];
        let rows = build_answer_key(&questions);
        assert_eq!(rows[0].ordinal, "Q1");
        assert_eq!(rows[0].answer, ANSWER_FALLBACK);
        assert_eq!(rows[0].marks, "10");
        assert_eq!(rows[1].ordinal, "Q2");
        assert_eq!(rows[1].answer, "B) 4");
        assert_eq!(rows[1].type_label, "MCQ");
    }
}
