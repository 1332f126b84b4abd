//! Canonical question record

use serde::{Deserialize, Serialize};

/// Prompt used when a question arrives without any text
pub const MISSING_TEXT_PLACEHOLDER: &str = "No question text";

/// Marks assumed for layout when a question carries none
pub const DEFAULT_LAYOUT_MARKS: f64 = 2.0;

/// Marks above which a descriptive question gets essay-sized answer space
pub const ESSAY_MARKS_THRESHOLD: f64 = 4.0;

/// Question category as far as layout is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Multiple choice with a discrete option list
    Mcq,
    /// Everything else: short answer, essay, case-based
    Other,
}

impl QuestionKind {
    /// Classify a raw type label. Only a case-insensitive "MCQ" is multiple choice.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(label) if label.trim().eq_ignore_ascii_case("MCQ") => QuestionKind::Mcq,
            _ => QuestionKind::Other,
        }
    }

    pub fn is_mcq(self) -> bool {
        self == QuestionKind::Mcq
    }
}

/// A question after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text, never empty
    pub text: String,
    /// Layout category derived from the type label
    pub kind: QuestionKind,
    /// Type label exactly as supplied
    pub type_label: Option<String>,
    /// Point value as supplied
    pub marks: Option<f64>,
    /// Normalized option list (meaningful for MCQ only)
    pub options: Vec<String>,
    /// Correct answer as text (numeric answers are stringified)
    pub correct_answer: Option<String>,
    /// Grader explanation, carried but not rendered
    pub explanation: Option<String>,
}

impl Question {
    /// Create a question with the given prompt and type label
    pub fn new(text: impl Into<String>, type_label: impl Into<String>) -> Self {
        let type_label = type_label.into();
        let text = text.into();
        Self {
            text: if text.trim().is_empty() {
                MISSING_TEXT_PLACEHOLDER.to_string()
            } else {
                text
            },
            kind: QuestionKind::from_label(Some(&type_label)),
            type_label: Some(type_label),
            marks: None,
            options: Vec::new(),
            correct_answer: None,
            explanation: None,
        }
    }

    pub fn with_marks(mut self, marks: f64) -> Self {
        self.marks = Some(marks);
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_correct_answer(mut self, answer: impl Into<String>) -> Self {
        self.correct_answer = Some(answer.into());
        self
    }

    /// Marks used for layout decisions. Zero or missing marks fall back to 2.
    pub fn layout_marks(&self) -> f64 {
        match self.marks {
            Some(m) if m != 0.0 && m.is_finite() => m,
            _ => DEFAULT_LAYOUT_MARKS,
        }
    }

    /// Upper-cased type label, empty when absent
    pub fn type_key(&self) -> String {
        self.type_label
            .as_deref()
            .map(|t| t.trim().to_uppercase())
            .unwrap_or_default()
    }

    /// Whether a descriptive question needs the larger answer space
    pub fn is_essay_sized(&self) -> bool {
        self.type_key() == "ESSAY" || self.layout_marks() > ESSAY_MARKS_THRESHOLD
    }

    /// Marks value shown in the answer key. Missing marks are reported as 0.
    pub fn answer_key_marks(&self) -> String {
        format_marks(self.marks.unwrap_or(0.0))
    }
}

/// Format a marks value without a trailing `.0` for whole numbers
pub fn format_marks(marks: f64) -> String {
    if marks.fract() == 0.0 && marks.is_finite() {
        format!("{:.0}", marks)
    } else {
        let s = format!("{:.2}", marks);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
