//! Page geometry and spacing
//!
//! All lengths are in layout units (millimetres for the stock page sizes).
//! Font sizes are in points; `points_per_unit` converts between the two.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Points per millimetre
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Standard page sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageSize {
    /// A4 (210mm x 297mm)
    A4,
    /// US Letter (8.5" x 11")
    Letter,
    /// Legal (8.5" x 14")
    Legal,
    /// Custom size in layout units
    Custom { width: f64, height: f64 },
}

impl PageSize {
    /// Width and height in layout units
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

/// Distances from the page bottom edge past which content moves to a new page.
/// A threshold closer to the edge than the bottom margin is clamped to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakThresholds {
    /// Checked before a question label
    pub question: f64,
    /// Checked before each MCQ option
    pub option: f64,
    /// Checked before a section header
    pub section: f64,
}

impl Default for BreakThresholds {
    fn default() -> Self {
        Self {
            question: 40.0,
            option: 20.0,
            section: 50.0,
        }
    }
}

/// Vertical and horizontal spacing inside question blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionSpacing {
    /// Label baseline to first prompt line
    pub title_gap: f64,
    /// Prompt line advance
    pub line_height: f64,
    /// Space after the prompt
    pub prompt_padding: f64,
    /// Prompt offset from the left margin
    pub prompt_indent: f64,
    /// Prompt wrap width is the content width minus this
    pub wrap_inset: f64,
    /// Option offset from the left margin
    pub option_indent: f64,
    /// Advance per option
    pub option_step: f64,
    /// Space after the option list
    pub option_padding: f64,
    /// Answer space for essay-sized questions
    pub essay_block: f64,
    /// Answer space for short questions
    pub short_block: f64,
    pub essay_lines: usize,
    pub short_lines: usize,
    /// Distance between ruled answer lines
    pub rule_step: f64,
    /// Space after every question
    pub trailing_gap: f64,
    /// Section header baseline to first question
    pub section_gap: f64,
}

impl Default for QuestionSpacing {
    fn default() -> Self {
        Self {
            title_gap: 6.0,
            line_height: 5.0,
            prompt_padding: 4.0,
            prompt_indent: 5.0,
            wrap_inset: 10.0,
            option_indent: 10.0,
            option_step: 6.0,
            option_padding: 4.0,
            essay_block: 40.0,
            short_block: 20.0,
            essay_lines: 5,
            short_lines: 3,
            rule_step: 8.0,
            trailing_gap: 6.0,
            section_gap: 8.0,
        }
    }
}

/// Immutable layout geometry passed into every renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    /// PDF points per layout unit
    pub points_per_unit: f64,
    /// Font family for all text
    pub font_family: String,
    /// Body text size in points
    pub body_font_size: f64,
    pub breaks: BreakThresholds,
    pub spacing: QuestionSpacing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::a4()
    }
}

impl LayoutConfig {
    /// A4 with 15mm margins
    pub fn a4() -> Self {
        Self::with_page_size(PageSize::A4)
    }

    /// US Letter with 15mm margins
    pub fn letter() -> Self {
        Self::with_page_size(PageSize::Letter)
    }

    /// Custom page size in layout units
    pub fn custom(width: f64, height: f64) -> Self {
        Self::with_page_size(PageSize::Custom { width, height })
    }

    fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            margin_top: 15.0,
            margin_bottom: 15.0,
            margin_left: 15.0,
            margin_right: 15.0,
            points_per_unit: POINTS_PER_MM,
            font_family: "Helvetica".to_string(),
            body_font_size: 11.0,
            breaks: BreakThresholds::default(),
            spacing: QuestionSpacing::default(),
        }
    }

    /// Set all four margins
    pub fn with_margins(mut self, margin: f64) -> Self {
        self.margin_top = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self.margin_right = margin;
        self
    }

    pub fn with_breaks(mut self, breaks: BreakThresholds) -> Self {
        self.breaks = breaks;
        self
    }

    pub fn page_width(&self) -> f64 {
        self.page_size.dimensions().0
    }

    pub fn page_height(&self) -> f64 {
        self.page_size.dimensions().1
    }

    /// Get the content area width (excluding margins)
    pub fn content_width(&self) -> f64 {
        self.page_width() - self.margin_left - self.margin_right
    }

    /// x of the right margin
    pub fn right_edge(&self) -> f64 {
        self.page_width() - self.margin_right
    }

    /// Lowest y content may occupy
    pub fn bottom_limit(&self) -> f64 {
        self.page_height() - self.margin_bottom
    }

    /// y past which a question label starts a new page
    pub fn question_break_y(&self) -> f64 {
        self.break_y(self.breaks.question)
    }

    /// y past which an option starts a new page
    pub fn option_break_y(&self) -> f64 {
        self.break_y(self.breaks.option)
    }

    /// y past which a section header starts a new page
    pub fn section_break_y(&self) -> f64 {
        self.break_y(self.breaks.section)
    }

    /// A threshold never lets content into the bottom margin
    fn break_y(&self, threshold: f64) -> f64 {
        (self.page_height() - threshold).min(self.bottom_limit())
    }

    /// Width available to a wrapped question prompt
    pub fn prompt_width(&self) -> f64 {
        self.content_width() - self.spacing.wrap_inset
    }

    /// Convert a length in points to layout units
    pub fn points_to_units(&self, points: f64) -> f64 {
        points / self.points_per_unit
    }

    /// Check the geometry leaves room to lay anything out
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.page_size.dimensions();
        let finite_positive = |v: f64| v.is_finite() && v > 0.0;
        let finite_non_negative = |v: f64| v.is_finite() && v >= 0.0;

        if !finite_positive(width) || !finite_positive(height) {
            return Err(LayoutError::InvalidPageSetup(format!(
                "page size {}x{}",
                width, height
            )));
        }
        if ![
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
        ]
        .into_iter()
        .all(finite_non_negative)
        {
            return Err(LayoutError::InvalidPageSetup(
                "margins must be non-negative".to_string(),
            ));
        }
        if self.prompt_width() <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "content width {} leaves no room for text",
                self.content_width()
            )));
        }
        if self.margin_top >= self.bottom_limit() {
            return Err(LayoutError::InvalidPageSetup(format!(
                "top margin {} is below the bottom limit {}",
                self.margin_top,
                self.bottom_limit()
            )));
        }
        if !finite_positive(self.points_per_unit) {
            return Err(LayoutError::InvalidPageSetup(format!(
                "points per unit {}",
                self.points_per_unit
            )));
        }
        if !finite_positive(self.body_font_size) || !finite_positive(self.spacing.line_height) {
            return Err(LayoutError::InvalidPageSetup(
                "font size and line height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_defaults() {
        let config = LayoutConfig::a4();
        assert_eq!(config.page_width(), 210.0);
        assert_eq!(config.page_height(), 297.0);
        assert_eq!(config.content_width(), 180.0);
        assert_eq!(config.prompt_width(), 170.0);
        assert_eq!(config.question_break_y(), 257.0);
        assert_eq!(config.option_break_y(), 277.0);
        assert_eq!(config.section_break_y(), 247.0);
        assert_eq!(config.bottom_limit(), 282.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_break_points_respect_wide_margins() {
        let config = LayoutConfig::a4().with_margins(25.0);
        assert_eq!(config.bottom_limit(), 272.0);
        assert_eq!(config.option_break_y(), 272.0);
        assert_eq!(config.question_break_y(), 257.0);

        let config = LayoutConfig::a4().with_margins(60.0);
        assert_eq!(config.question_break_y(), 237.0);
        assert_eq!(config.section_break_y(), 237.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(LayoutConfig::custom(20.0, 100.0).validate().is_err());
        assert!(LayoutConfig::custom(100.0, 25.0).validate().is_err());
        assert!(LayoutConfig::a4().with_margins(-1.0).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LayoutConfig = serde_json::from_str(
            r#"{"pageSize": {"kind": "letter"}, "marginTop": 20, "breaks": {"question": 45}}"#,
        )
        .unwrap();
        assert_eq!(config.page_size, PageSize::Letter);
        assert_eq!(config.margin_top, 20.0);
        assert_eq!(config.margin_left, 15.0);
        assert_eq!(config.breaks.question, 45.0);
        assert_eq!(config.breaks.option, 20.0);
    }
}
