//! Page canvas and render cursor
//!
//! The canvas owns the page buffer and a single vertical cursor. Renderers
//! draw at absolute positions and move the cursor; nothing breaks pages
//! implicitly except [`PageCanvas::ensure_below`] and friends.

use crate::{wrap_text, FontMetrics, LayoutConfig};
use render_model::{Color, GlyphRun, PageRender, Rect, RenderItem, RenderModel};

/// Current page index and vertical offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCursor {
    pub page_index: usize,
    pub y: f64,
}

/// Font size, weight, and color for a text draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub color: Color,
}

impl TextStyle {
    pub fn normal(size: f64) -> Self {
        Self {
            size,
            bold: false,
            color: Color::BLACK,
        }
    }

    pub fn bold(size: f64) -> Self {
        Self {
            size,
            bold: true,
            color: Color::BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Horizontal anchoring for a text draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Paged drawing surface
pub struct PageCanvas<'a> {
    config: &'a LayoutConfig,
    pages: Vec<PageRender>,
    y: f64,
}

impl<'a> PageCanvas<'a> {
    /// Start with one empty page, cursor at the top margin
    pub fn new(config: &'a LayoutConfig) -> Self {
        let mut canvas = Self {
            config,
            pages: Vec::new(),
            y: config.margin_top,
        };
        canvas.push_page();
        canvas
    }

    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    pub fn cursor(&self) -> RenderCursor {
        RenderCursor {
            page_index: self.pages.len() - 1,
            y: self.y,
        }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Start a new page and move the cursor to its top margin
    pub fn break_page(&mut self) {
        tracing::debug!(
            "Page break at y={:.1} on page {}",
            self.y,
            self.pages.len() - 1
        );
        self.push_page();
        self.y = self.config.margin_top;
    }

    /// Break the page if the cursor is past `limit`
    pub fn break_if_past(&mut self, limit: f64) -> bool {
        if self.y > limit {
            self.break_page();
            true
        } else {
            false
        }
    }

    /// Break the page unless `height` more units fit above the bottom margin
    pub fn ensure_room(&mut self, height: f64) -> bool {
        if self.y + height > self.config.bottom_limit() {
            self.break_page();
            true
        } else {
            false
        }
    }

    fn push_page(&mut self) {
        let index = self.pages.len() as u32;
        self.pages.push(PageRender::new(
            index,
            self.config.page_width(),
            self.config.page_height(),
        ));
    }

    fn current_page(&mut self) -> &mut PageRender {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn metrics(&self, style: &TextStyle) -> FontMetrics {
        FontMetrics::for_family(&self.config.font_family, style.bold)
    }

    /// Width of `text` in layout units
    pub fn measure(&self, text: &str, style: &TextStyle) -> f64 {
        let points = self.metrics(style).text_width(text, style.size);
        self.config.points_to_units(points)
    }

    /// Wrap `text` to `max_width` layout units
    pub fn wrap(&self, text: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
        wrap_text(text, max_width, |s| self.measure(s, style))
    }

    /// Draw one line of text with its baseline at `y`
    pub fn text(&mut self, text: &str, x: f64, y: f64, align: Align, style: &TextStyle) {
        let x = match align {
            Align::Left => x,
            Align::Center => x - self.measure(text, style) / 2.0,
            Align::Right => x - self.measure(text, style),
        };
        let family = self.config.font_family.clone();
        let run = GlyphRun::new(text, x, y)
            .with_font(family, style.size, style.bold)
            .with_color(style.color);
        self.current_page().push(RenderItem::GlyphRun(run));
    }

    /// Draw text centered on the page
    pub fn text_centered(&mut self, text: &str, y: f64, style: &TextStyle) {
        let center = self.config.page_width() / 2.0;
        self.text(text, center, y, Align::Center, style);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
        self.current_page().push(RenderItem::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width: 0.2,
        });
    }

    /// Full-width horizontal rule between the margins
    pub fn rule(&mut self, y: f64, color: Color) {
        let (x1, x2) = (self.config.margin_left, self.config.right_edge());
        self.line(x1, y, x2, y, color);
    }

    pub fn rect(&mut self, bounds: Rect, fill: Option<Color>, stroke: Option<Color>) {
        self.current_page().push(RenderItem::Rectangle {
            bounds,
            fill,
            stroke,
            stroke_width: if stroke.is_some() { 0.1 } else { 0.0 },
        });
    }

    /// Finish drawing and hand over the pages
    pub fn finish(self) -> RenderModel {
        let mut model = RenderModel::new(self.config.points_per_unit);
        for page in self.pages {
            model.add_page(page);
        }
        model
    }
}
