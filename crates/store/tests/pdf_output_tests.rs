//! Property tests for rendered PDF output

use chrono::{TimeZone, Utc};
use exam_model::{ExamDocument, Question};
use proptest::prelude::*;
use store::sink::{DocumentSink, SaveOutcome, SinkKind};
use store::ExamExporter;

/// A sink that is never asked to save
struct NullSink;

impl DocumentSink for NullSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Browser
    }

    async fn save(&self, file_name: &str, _bytes: &[u8]) -> SaveOutcome {
        SaveOutcome::Saved {
            uri: file_name.to_string(),
        }
    }
}

fn question_strategy() -> impl Strategy<Value = Question> {
    (
        prop_oneof![Just("MCQ"), Just("Short"), Just("Essay")],
        "[a-zA-Z ]{1,120}",
        prop::collection::vec("[a-z0-9éü]{1,10}", 0..5),
    )
        .prop_map(|(kind, text, options)| Question::new(text, kind).with_options(options))
}

fn exam(questions: Vec<Question>) -> ExamDocument {
    ExamDocument {
        subject_name: "Chemistry".to_string(),
        topic_name: "Organic".to_string(),
        questions,
        total_marks: 40.0,
        duration_minutes: 90,
        generated_at: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pdf_page_count_matches_layout(questions in prop::collection::vec(question_strategy(), 0..20)) {
        let exporter = ExamExporter::new(NullSink);
        let (layout, bytes) = exporter.render_exam(&exam(questions)).unwrap();

        let text = String::from_utf8_lossy(&bytes);
        let count = format!("/Count {}", layout.page_count());
        prop_assert!(text.contains(&count));
        prop_assert!(text.starts_with("%PDF-1.4"));
        prop_assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn pdf_bytes_are_deterministic(questions in prop::collection::vec(question_strategy(), 0..10)) {
        let exporter = ExamExporter::new(NullSink);
        let doc = exam(questions);
        let (_, first) = exporter.render_exam(&doc).unwrap();
        let (_, second) = exporter.render_exam(&doc).unwrap();
        prop_assert_eq!(first, second);
    }
}
