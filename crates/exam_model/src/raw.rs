//! Raw payload shapes
//!
//! The question generation and vetting services do not agree on field names
//! (`type` vs `question_type`, `options` vs `choices`, ...) or encodings
//! (options as a list or as a string, answers as numbers or strings). The
//! raw types here accept any of them and collapse into the canonical
//! [`Question`] and [`ExamDocument`].

use crate::options::normalize_options;
use crate::{ExamDocument, Question, QuestionKind, Result, MISSING_TEXT_PLACEHOLDER};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Default exam duration in minutes
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

const TEXT_KEYS: &[&str] = &["question_text", "question", "text"];
const TYPE_KEYS: &[&str] = &["type", "question_type", "kind"];
const MARKS_KEYS: &[&str] = &["marks", "total_marks"];
const OPTION_KEYS: &[&str] = &["options", "choices"];
const ANSWER_KEYS: &[&str] = &["correct_answer", "correctAnswer", "answer"];

/// A question as received, before normalization
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawQuestion {
    pub text: Option<String>,
    pub type_label: Option<String>,
    pub marks: Option<f64>,
    pub options: Value,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

impl From<Value> for RawQuestion {
    fn from(value: Value) -> Self {
        let Value::Object(map) = value else {
            return RawQuestion::default();
        };

        RawQuestion {
            text: first_string(&map, TEXT_KEYS),
            type_label: first_string(&map, TYPE_KEYS),
            marks: first_number(&map, MARKS_KEYS),
            options: first_present(&map, OPTION_KEYS).cloned().unwrap_or(Value::Null),
            correct_answer: first_string(&map, ANSWER_KEYS),
            explanation: first_string(&map, &["explanation"]),
        }
    }
}

impl RawQuestion {
    /// Collapse into the canonical record
    pub fn normalize(self) -> Question {
        let text = self
            .text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| MISSING_TEXT_PLACEHOLDER.to_string());

        Question {
            text,
            kind: QuestionKind::from_label(self.type_label.as_deref()),
            type_label: self.type_label,
            marks: self.marks,
            options: normalize_options(&self.options),
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        }
    }
}

/// An exam paper as received from the history or generation endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawExamPaper {
    pub subject_name: Option<String>,
    pub topic_name: Option<String>,
    pub questions: Vec<RawQuestion>,
    pub total_marks: Option<f64>,
    pub duration: Option<f64>,
    pub generated_date: Option<String>,
}

impl From<Value> for RawExamPaper {
    fn from(value: Value) -> Self {
        let Value::Object(map) = value else {
            return RawExamPaper::default();
        };

        let questions = match first_present(&map, &["questions"]) {
            Some(Value::Array(items)) => items.iter().cloned().map(RawQuestion::from).collect(),
            _ => Vec::new(),
        };

        RawExamPaper {
            subject_name: first_string(&map, &["subject_name", "subject"]),
            topic_name: first_string(&map, &["topic_name", "topic"]),
            questions,
            total_marks: first_number(&map, &["total_marks", "marks"]),
            duration: first_number(&map, &["duration"]),
            generated_date: first_string(&map, &["generated_date", "created_at", "date"]),
        }
    }
}

impl RawExamPaper {
    /// Parse a payload from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Collapse into the canonical document, resolving the timestamp once
    pub fn normalize(self) -> ExamDocument {
        let duration_minutes = self
            .duration
            .filter(|d| *d > 0.0 && d.is_finite())
            .map(|d| d.round() as u32)
            .unwrap_or(DEFAULT_DURATION_MINUTES);

        ExamDocument {
            subject_name: self.subject_name.unwrap_or_else(|| "Exam".to_string()),
            topic_name: self.topic_name.unwrap_or_else(|| "General".to_string()),
            questions: self.questions.into_iter().map(RawQuestion::normalize).collect(),
            total_marks: self.total_marks.unwrap_or(0.0),
            duration_minutes,
            generated_at: self
                .generated_date
                .as_deref()
                .map(parse_timestamp)
                .unwrap_or_else(Utc::now),
        }
    }
}

/// Parse the timestamp formats the services emit; unparseable values become "now"
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.and_utc();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.and_utc();
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return dt.and_utc();
    }

    tracing::warn!("Unrecognized generation date {:?}, using current time", raw);
    Utc::now()
}

/// First key holding a value that is neither null nor an empty string
fn first_present<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|k| map.get(*k)).find(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

pub(crate) fn first_string(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_present(map, keys).and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Whole-valued floats print without a fraction, so `1.0` reads as index 1
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

pub(crate) fn first_number(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find_map(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|n| n.is_finite())
}
