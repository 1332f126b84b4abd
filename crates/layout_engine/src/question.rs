//! Question block layout
//!
//! One question is a bold ordinal/marks label, the wrapped prompt, and then
//! either the lettered option list (MCQ) or ruled answer space (everything
//! else). Page breaks are decided at three points: before the label, before
//! each option, and before the answer space.

use crate::{PageCanvas, TextStyle};
use exam_model::{format_marks, option_letter, Question, QuestionKind};
use render_model::Color;
use serde::{Deserialize, Serialize};

/// Color of the ruled answer lines
pub const ANSWER_LINE_COLOR: Color = Color::gray(230);

/// Where a question's label landed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuestionPlacement {
    /// Global 1-based ordinal
    pub ordinal: usize,
    /// Position of the question in the input list
    pub input_index: usize,
    pub page_index: usize,
    /// Label baseline
    pub y: f64,
}

/// Label text for a question block
pub fn question_label(ordinal: usize, question: &Question) -> String {
    format!("{}. [{} Marks]", ordinal, format_marks(question.layout_marks()))
}

/// Lay out one question at the cursor and advance past it
pub fn render_question(
    canvas: &mut PageCanvas<'_>,
    question: &Question,
    ordinal: usize,
    input_index: usize,
) -> QuestionPlacement {
    let config = canvas.config();
    let spacing = &config.spacing;
    let body = config.body_font_size;

    canvas.break_if_past(config.question_break_y());
    let placement = QuestionPlacement {
        ordinal,
        input_index,
        page_index: canvas.cursor().page_index,
        y: canvas.y(),
    };

    canvas.text(
        &question_label(ordinal, question),
        config.margin_left,
        canvas.y(),
        crate::Align::Left,
        &TextStyle::bold(body),
    );

    let prompt_style = TextStyle::normal(body);
    let lines = canvas.wrap(&question.text, &prompt_style, config.prompt_width());
    let prompt_x = config.margin_left + spacing.prompt_indent;
    let mut line_y = canvas.y() + spacing.title_gap;
    for line in &lines {
        if line_y > config.bottom_limit() {
            canvas.break_page();
            line_y = config.margin_top;
        }
        canvas.text(line, prompt_x, line_y, crate::Align::Left, &prompt_style);
        line_y += spacing.line_height;
    }
    canvas.set_y(line_y + spacing.prompt_padding);

    match question.kind {
        QuestionKind::Mcq if !question.options.is_empty() => {
            render_options(canvas, &question.options, &prompt_style);
        }
        QuestionKind::Mcq => {}
        QuestionKind::Other => render_answer_space(canvas, question),
    }

    canvas.advance(spacing.trailing_gap);
    placement
}

fn render_options(canvas: &mut PageCanvas<'_>, options: &[String], style: &TextStyle) {
    let config = canvas.config();
    let x = config.margin_left + config.spacing.option_indent;

    for (index, option) in options.iter().enumerate() {
        canvas.break_if_past(config.option_break_y());
        let text = format!("{}) {}", option_letter(index), option);
        canvas.text(&text, x, canvas.y(), crate::Align::Left, style);
        canvas.advance(config.spacing.option_step);
    }
    canvas.advance(config.spacing.option_padding);
}

fn render_answer_space(canvas: &mut PageCanvas<'_>, question: &Question) {
    let config = canvas.config();
    let spacing = &config.spacing;
    let (height, count) = if question.is_essay_sized() {
        (spacing.essay_block, spacing.essay_lines)
    } else {
        (spacing.short_block, spacing.short_lines)
    };

    canvas.ensure_room(height);

    let x1 = config.margin_left + spacing.prompt_indent;
    let x2 = config.right_edge();
    let top = canvas.y();
    for l in 0..count {
        let y = top + l as f64 * spacing.rule_step;
        canvas.line(x1, y, x2, y, ANSWER_LINE_COLOR);
    }
    canvas.advance(height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutConfig;
    use render_model::RenderItem;

    fn answer_lines(page: &render_model::PageRender) -> usize {
        page.items
            .iter()
            .filter(|i| matches!(i, RenderItem::Line { color, .. } if *color == ANSWER_LINE_COLOR))
            .count()
    }

    #[test]
    fn test_mcq_block_advance() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        canvas.set_y(50.0);

        let q = Question::new("Which is FIFO?", "MCQ")
            .with_marks(2.0)
            .with_options(["Stack", "Queue", "Tree", "Graph"]);
        let placement = render_question(&mut canvas, &q, 1, 0);

        assert_eq!(placement.y, 50.0);
        // label 6 + one line 5 + padding 4 + 4 options * 6 + 4 + trailing 6
        assert!((canvas.y() - (50.0 + 6.0 + 5.0 + 4.0 + 24.0 + 4.0 + 6.0)).abs() < 1e-9);

        let model = canvas.finish();
        let page = &model.pages[0];
        assert!(page.contains_text("1. [2 Marks]"));
        assert!(page.contains_text("B) Queue"));
        assert!(page.contains_text("D) Graph"));
    }

    #[test]
    fn test_essay_gets_five_lines() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        let q = Question::new("Discuss.", "OTHER").with_marks(10.0);
        render_question(&mut canvas, &q, 3, 0);

        let model = canvas.finish();
        assert_eq!(answer_lines(&model.pages[0]), 5);
        assert!(model.pages[0].contains_text("3. [10 Marks]"));
    }

    #[test]
    fn test_short_answer_gets_three_lines() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        let start = canvas.y();
        render_question(&mut canvas, &Question::new("Define.", "Short"), 1, 0);

        // label 6 + line 5 + 4 + block 20 + trailing 6
        assert!((canvas.y() - (start + 41.0)).abs() < 1e-9);
        let model = canvas.finish();
        assert_eq!(answer_lines(&model.pages[0]), 3);
        assert!(model.pages[0].contains_text("1. [2 Marks]"));
    }

    #[test]
    fn test_mcq_without_options_draws_only_prompt() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        render_question(&mut canvas, &Question::new("Orphan", "MCQ"), 1, 0);

        let model = canvas.finish();
        assert_eq!(model.pages[0].items.len(), 2);
    }

    #[test]
    fn test_label_breaks_past_threshold() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        canvas.set_y(config.question_break_y() + 1.0);
        let placement = render_question(&mut canvas, &Question::new("Q", "MCQ"), 7, 0);

        assert_eq!(placement.page_index, 1);
        assert_eq!(placement.y, config.margin_top);
    }

    #[test]
    fn test_answer_space_moves_to_new_page() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        // Label fits, but 40 units of essay space after the prompt do not
        canvas.set_y(config.question_break_y() - 1.0);
        let q = Question::new("Essay", "ESSAY");
        render_question(&mut canvas, &q, 1, 0);

        let model = canvas.finish();
        assert_eq!(model.page_count(), 2);
        assert_eq!(answer_lines(&model.pages[0]), 0);
        assert_eq!(answer_lines(&model.pages[1]), 5);
    }

    #[test]
    fn test_option_breaks_individually() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        canvas.set_y(250.0);
        let q = Question::new("Pick", "MCQ").with_options(["a", "b", "c", "d", "e"]);
        render_question(&mut canvas, &q, 1, 0);

        // Options start at 265: 265, 271, 277 fit; 283 is past 277
        let model = canvas.finish();
        assert!(model.pages[0].contains_text("C) c"));
        assert!(model.pages[1].contains_text("D) d"));
        assert!(model.pages[1].contains_text("E) e"));
    }
}
