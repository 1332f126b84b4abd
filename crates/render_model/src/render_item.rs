//! Render item types

use crate::{RenderError, Result};
use serde::{Deserialize, Serialize};

/// A rectangle in layout units, top-left origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray level, 0 = black, 255 = white
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A run of text on one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRun {
    /// The text to render
    pub text: String,
    /// Font family
    pub font_family: String,
    /// Font size in points
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    /// Text color
    pub color: Color,
    /// Position (baseline start)
    pub x: f64,
    pub y: f64,
}

impl GlyphRun {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            font_family: "Helvetica".to_string(),
            font_size: 11.0,
            bold: false,
            italic: false,
            color: Color::BLACK,
            x,
            y,
        }
    }

    pub fn with_font(mut self, family: impl Into<String>, size: f64, bold: bool) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self.bold = bold;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Render item types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderItem {
    /// A glyph run (text)
    GlyphRun(GlyphRun),
    /// A filled and/or stroked rectangle
    Rectangle {
        bounds: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    },
    /// A straight line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
}

/// A rendered page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRender {
    pub page_index: u32,
    pub width: f64,
    pub height: f64,
    pub items: Vec<RenderItem>,
}

impl PageRender {
    pub fn new(page_index: u32, width: f64, height: f64) -> Self {
        Self {
            page_index,
            width,
            height,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    /// All glyph runs on the page, in drawing order
    pub fn glyph_runs(&self) -> impl Iterator<Item = &GlyphRun> {
        self.items.iter().filter_map(|item| match item {
            RenderItem::GlyphRun(run) => Some(run),
            _ => None,
        })
    }

    /// Whether any glyph run on the page has exactly this text
    pub fn contains_text(&self, text: &str) -> bool {
        self.glyph_runs().any(|run| run.text == text)
    }

    /// Lowest extent of any item on the page
    pub fn max_item_y(&self) -> f64 {
        self.items
            .iter()
            .map(|item| match item {
                RenderItem::GlyphRun(run) => run.y,
                RenderItem::Rectangle { bounds, .. } => bounds.bottom(),
                RenderItem::Line { y1, y2, .. } => y1.max(*y2),
            })
            .fold(0.0, f64::max)
    }
}

/// The complete render model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub pages: Vec<PageRender>,
    /// PDF points per layout unit
    pub points_per_unit: f64,
}

impl RenderModel {
    pub fn new(points_per_unit: f64) -> Self {
        Self {
            pages: Vec::new(),
            points_per_unit,
        }
    }

    pub fn add_page(&mut self, page: PageRender) {
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check the model can be written out
    pub fn validate(&self) -> Result<()> {
        if !(self.points_per_unit.is_finite() && self.points_per_unit > 0.0) {
            return Err(RenderError::InvalidScale(self.points_per_unit));
        }
        if self.pages.is_empty() {
            return Err(RenderError::NoPages);
        }
        for page in &self.pages {
            let ok = |v: f64| v.is_finite() && v > 0.0;
            if !ok(page.width) || !ok(page.height) {
                return Err(RenderError::InvalidPageSize {
                    index: page.page_index,
                    width: page.width,
                    height: page.height,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut model = RenderModel::new(1.0);
        assert_eq!(model.validate(), Err(RenderError::NoPages));

        model.add_page(PageRender::new(0, 210.0, 297.0));
        assert!(model.validate().is_ok());

        model.add_page(PageRender::new(1, 0.0, 297.0));
        assert!(matches!(
            model.validate(),
            Err(RenderError::InvalidPageSize { index: 1, .. })
        ));

        let bad = RenderModel {
            pages: vec![PageRender::new(0, 1.0, 1.0)],
            points_per_unit: 0.0,
        };
        assert_eq!(bad.validate(), Err(RenderError::InvalidScale(0.0)));
    }

    #[test]
    fn test_max_item_y() {
        let mut page = PageRender::new(0, 100.0, 100.0);
        page.push(RenderItem::GlyphRun(GlyphRun::new("a", 0.0, 12.0)));
        page.push(RenderItem::Rectangle {
            bounds: Rect::new(0.0, 20.0, 10.0, 5.0),
            fill: Some(Color::gray(200)),
            stroke: None,
            stroke_width: 0.0,
        });
        assert_eq!(page.max_item_y(), 25.0);
        assert!(page.contains_text("a"));
    }

    #[test]
    fn test_item_serializes_with_tag() {
        let item = RenderItem::GlyphRun(GlyphRun::new("x", 1.0, 2.0));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "GlyphRun");
    }
}
