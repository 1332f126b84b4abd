//! Exam document

use crate::{build_answer_key, AnswerKeyRow, Question, RawExamPaper, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized exam ready for layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamDocument {
    pub subject_name: String,
    pub topic_name: String,
    /// Questions in original input order
    pub questions: Vec<Question>,
    pub total_marks: f64,
    pub duration_minutes: u32,
    /// Resolved once at normalization so repeated renders agree
    pub generated_at: DateTime<Utc>,
}

impl ExamDocument {
    /// Parse and normalize a raw JSON payload
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(RawExamPaper::from_json(json)?.normalize())
    }

    /// Multiple-choice questions, in input order
    pub fn mcq_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.kind.is_mcq())
    }

    /// Everything that is not multiple choice, in input order
    pub fn descriptive_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| !q.kind.is_mcq())
    }

    /// Answer key rows in input order
    pub fn answer_key(&self) -> Vec<AnswerKeyRow> {
        build_answer_key(&self.questions)
    }

    /// `{subject}_{topic}_Exam.pdf` with whitespace runs replaced by `_`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_Exam.pdf",
            underscore_whitespace(&self.subject_name),
            underscore_whitespace(&self.topic_name)
        )
    }
}

/// Replace every run of whitespace with a single underscore
pub fn underscore_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}
