//! Exam paper assembly
//!
//! Header block, Part A (multiple choice) and Part B (descriptive) in input
//! order within each part, then the answer key on its own page.

use crate::{
    layout_table, render_question, ColumnWidth, LayoutConfig, PageCanvas, QuestionPlacement,
    Result, TableSpec, TableTheme, TextStyle,
};
use exam_model::{format_marks, AnswerKeyRow, ExamDocument};
use render_model::{Color, RenderModel};

/// Brand color used for titles and the answer key header
pub const BRAND_DARK: Color = Color::rgb(13, 38, 38);

/// Secondary text color for subtitles
pub const SUBTITLE_GRAY: Color = Color::gray(100);

/// Color of header rules
pub const RULE_GRAY: Color = Color::gray(200);

pub const EXAM_TITLE: &str = "AI EXAM ORACLE";
pub const PART_A_HEADER: &str = "PART A: MULTIPLE CHOICE QUESTIONS";
pub const PART_B_HEADER: &str = "PART B: DESCRIPTIVE QUESTIONS";
pub const ANSWER_KEY_TITLE: &str = "ANSWER KEY & GRADING GUIDE";
pub const ANSWER_KEY_HEAD: [&str; 4] = ["Q", "Type", "Correct Answer / Key Points", "Marks"];

/// A laid-out exam paper
#[derive(Debug, Clone)]
pub struct ExamLayout {
    pub model: RenderModel,
    /// One entry per question in ordinal order
    pub placements: Vec<QuestionPlacement>,
    /// Answer key rows in input order
    pub answer_key: Vec<AnswerKeyRow>,
    /// Page the answer key starts on
    pub answer_key_page: usize,
}

impl ExamLayout {
    pub fn page_count(&self) -> usize {
        self.model.page_count()
    }
}

/// Lay out a full exam paper
pub fn assemble_exam(doc: &ExamDocument, config: &LayoutConfig) -> Result<ExamLayout> {
    config.validate()?;
    let mut canvas = PageCanvas::new(config);

    render_header(&mut canvas, doc);

    let (mcqs, descriptive): (Vec<_>, Vec<_>) = doc
        .questions
        .iter()
        .enumerate()
        .partition(|(_, q)| q.kind.is_mcq());
    let mut placements = Vec::with_capacity(doc.questions.len());
    let mut ordinal = 1;

    for (header, group) in [(PART_A_HEADER, &mcqs), (PART_B_HEADER, &descriptive)] {
        if group.is_empty() {
            continue;
        }
        render_section_header(&mut canvas, header);
        for &(input_index, question) in group.iter() {
            placements.push(render_question(&mut canvas, question, ordinal, input_index));
            ordinal += 1;
        }
    }

    let answer_key = doc.answer_key();
    let answer_key_page = render_answer_key(&mut canvas, &answer_key)?;

    let model = canvas.finish();
    tracing::debug!(
        "Laid out {} questions on {} pages",
        placements.len(),
        model.page_count()
    );

    Ok(ExamLayout {
        model,
        placements,
        answer_key,
        answer_key_page,
    })
}

fn render_header(canvas: &mut PageCanvas<'_>, doc: &ExamDocument) {
    let config = canvas.config();
    let mut y = canvas.y();

    canvas.text_centered(EXAM_TITLE, y, &TextStyle::bold(18.0));
    y += 8.0;

    let subtitle = format!("{} - EXAM PAPER", doc.subject_name.to_uppercase());
    canvas.text_centered(&subtitle, y, &TextStyle::normal(14.0));
    y += 7.0;

    let topic = format!("Topic: {}", doc.topic_name);
    canvas.text_centered(&topic, y, &TextStyle::normal(11.0).with_color(SUBTITLE_GRAY));
    y += 10.0;

    canvas.rule(y, RULE_GRAY);
    y += 7.0;

    let meta = TextStyle::normal(10.0);
    let date = format!("Date: {}", doc.generated_at.format("%-m/%-d/%Y"));
    let duration = format!("Duration: {} mins", doc.duration_minutes);
    let marks = format!("Total Marks: {}", format_marks(doc.total_marks));
    canvas.text(&date, config.margin_left, y, crate::Align::Left, &meta);
    canvas.text(&duration, config.margin_left + 50.0, y, crate::Align::Left, &meta);
    canvas.text(&marks, config.right_edge(), y, crate::Align::Right, &meta);
    y += 5.0;

    canvas.rule(y, RULE_GRAY);
    y += 10.0;

    canvas.set_y(y);
}

fn render_section_header(canvas: &mut PageCanvas<'_>, title: &str) {
    let config = canvas.config();
    canvas.break_if_past(config.section_break_y());
    canvas.text(
        title,
        config.margin_left,
        canvas.y(),
        crate::Align::Left,
        &TextStyle::bold(12.0),
    );
    canvas.advance(config.spacing.section_gap);
}

/// Answer key on a fresh page; returns the page it starts on
fn render_answer_key(canvas: &mut PageCanvas<'_>, rows: &[AnswerKeyRow]) -> Result<usize> {
    canvas.break_page();
    let page = canvas.cursor().page_index;

    canvas.text_centered(ANSWER_KEY_TITLE, canvas.y(), &TextStyle::bold(14.0));
    canvas.advance(15.0);

    let body = rows
        .iter()
        .map(|row| row.cells().iter().map(|c| c.to_string()).collect())
        .collect();
    let spec = TableSpec::new(ANSWER_KEY_HEAD)
        .with_rows(body)
        .with_theme(TableTheme::Grid)
        .with_columns(vec![
            ColumnWidth::Fixed(15.0),
            ColumnWidth::Fixed(20.0),
            ColumnWidth::Auto,
            ColumnWidth::Fixed(20.0),
        ])
        .with_head_colors(BRAND_DARK, Color::WHITE)
        .with_font_size(9.0)
        .with_padding(3.0);
    layout_table(canvas, &spec)?;

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_model::Question;

    fn doc(questions: Vec<Question>) -> ExamDocument {
        ExamDocument {
            subject_name: "Computer Science".to_string(),
            topic_name: "Data Structures".to_string(),
            questions,
            total_marks: 12.0,
            duration_minutes: 90,
            generated_at: chrono::DateTime::parse_from_rfc3339("2024-03-05T10:00:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc),
        }
    }

    #[test]
    fn test_header_block() {
        let layout = assemble_exam(&doc(vec![]), &LayoutConfig::a4()).unwrap();
        let first = &layout.model.pages[0];
        assert!(first.contains_text("AI EXAM ORACLE"));
        assert!(first.contains_text("COMPUTER SCIENCE - EXAM PAPER"));
        assert!(first.contains_text("Topic: Data Structures"));
        assert!(first.contains_text("Date: 3/5/2024"));
        assert!(first.contains_text("Duration: 90 mins"));
        assert!(first.contains_text("Total Marks: 12"));
    }

    #[test]
    fn test_empty_exam_has_no_sections() {
        let layout = assemble_exam(&doc(vec![]), &LayoutConfig::a4()).unwrap();
        let all = &layout.model.pages;
        assert!(all.iter().all(|p| !p.contains_text(PART_A_HEADER)));
        assert!(all.iter().all(|p| !p.contains_text(PART_B_HEADER)));
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.answer_key_page, 1);
    }

    #[test]
    fn test_only_descriptive_section() {
        let layout = assemble_exam(
            &doc(vec![Question::new("Explain", "Essay")]),
            &LayoutConfig::a4(),
        )
        .unwrap();
        let first = &layout.model.pages[0];
        assert!(!first.contains_text(PART_A_HEADER));
        assert!(first.contains_text(PART_B_HEADER));
    }

    #[test]
    fn test_mcq_ordinals_come_first() {
        let questions = vec![
            Question::new("Essay one", "Essay").with_marks(10.0),
            Question::new("Pick one", "MCQ").with_options(["a", "b"]),
        ];
        let layout = assemble_exam(&doc(questions), &LayoutConfig::a4()).unwrap();
        let first = &layout.model.pages[0];

        // The MCQ is second in input order but first on the paper
        assert!(first.contains_text("1. [2 Marks]"));
        assert!(first.contains_text("2. [10 Marks]"));
        assert!(layout.placements[0].y < layout.placements[1].y);
        assert_eq!(layout.placements[0].input_index, 1);
        assert_eq!(layout.placements[1].input_index, 0);

        // The answer key keeps input order
        assert_eq!(layout.answer_key[0].ordinal, "Q1");
        assert_eq!(layout.answer_key[0].type_label, "Essay");
        assert_eq!(layout.answer_key[1].answer, exam_model::ANSWER_FALLBACK);
    }

    #[test]
    fn test_answer_key_on_own_page() {
        let questions = vec![Question::new("Pick", "MCQ")
            .with_options(["3", "4"])
            .with_correct_answer("1")];
        let layout = assemble_exam(&doc(questions), &LayoutConfig::a4()).unwrap();
        let key_page = &layout.model.pages[layout.answer_key_page];

        assert!(key_page.contains_text(ANSWER_KEY_TITLE));
        assert!(key_page.contains_text("Correct Answer / Key Points"));
        assert!(key_page.contains_text("B) 4"));
        assert!(!layout.model.pages[0].contains_text(ANSWER_KEY_TITLE));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let config = LayoutConfig::custom(10.0, 10.0);
        assert!(assemble_exam(&doc(vec![]), &config).is_err());
    }
}
