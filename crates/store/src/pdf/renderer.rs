//! Render model to PDF content streams
//!
//! Layout coordinates are in layout units with a top-left origin. PDF user
//! space is in points with a bottom-left origin, so every coordinate is
//! scaled by the model's points-per-unit and y is flipped against the page
//! height.

use super::content::ContentStream;
use super::fonts::{encode_win_ansi, FontManager, StandardFont};
use render_model::{Color, GlyphRun, PageRender, Rect, RenderItem};

/// Converts layout units to PDF points for one page
#[derive(Debug, Clone, Copy)]
pub struct PageTransform {
    scale: f64,
    page_height: f64,
}

impl PageTransform {
    pub fn new(scale: f64, page_height_units: f64) -> Self {
        Self {
            scale,
            page_height: page_height_units,
        }
    }

    pub fn x(&self, x: f64) -> f64 {
        x * self.scale
    }

    pub fn y(&self, y: f64) -> f64 {
        (self.page_height - y) * self.scale
    }

    pub fn length(&self, v: f64) -> f64 {
        v * self.scale
    }
}

/// Renders pages and tracks the fonts they use
#[derive(Debug)]
pub struct PdfRenderer {
    font_manager: FontManager,
    scale: f64,
}

impl PdfRenderer {
    /// `scale` is PDF points per layout unit
    pub fn new(scale: f64) -> Self {
        Self {
            font_manager: FontManager::new(),
            scale,
        }
    }

    pub fn font_manager(&self) -> &FontManager {
        &self.font_manager
    }

    /// Page size in points
    pub fn page_size(&self, page: &PageRender) -> (f64, f64) {
        (page.width * self.scale, page.height * self.scale)
    }

    /// Render one page. Shapes go first so fills sit under text.
    pub fn render_page(&mut self, page: &PageRender) -> ContentStream {
        let transform = PageTransform::new(self.scale, page.height);
        let mut content = ContentStream::new();

        let mut runs: Vec<&GlyphRun> = Vec::new();
        for item in &page.items {
            match item {
                RenderItem::GlyphRun(run) => runs.push(run),
                RenderItem::Rectangle {
                    bounds,
                    fill,
                    stroke,
                    stroke_width,
                } => render_rectangle(&mut content, &transform, bounds, *fill, *stroke, *stroke_width),
                RenderItem::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    width,
                } => {
                    content
                        .save_state()
                        .set_stroke_color(*color)
                        .set_line_width(transform.length(*width))
                        .move_to(transform.x(*x1), transform.y(*y1))
                        .line_to(transform.x(*x2), transform.y(*y2))
                        .stroke()
                        .restore_state();
                }
            }
        }

        if !runs.is_empty() {
            self.render_text(&mut content, &transform, &runs);
        }
        content
    }

    fn render_text(&mut self, content: &mut ContentStream, transform: &PageTransform, runs: &[&GlyphRun]) {
        content.begin_text();
        let mut current_font: Option<(String, f64)> = None;
        let mut current_color: Option<Color> = None;

        for run in runs {
            let font = StandardFont::resolve(&run.font_family, run.bold, run.italic);
            let resource = self.font_manager.resource_for(font);
            let font_changed = match &current_font {
                Some((name, size)) => *name != resource || *size != run.font_size,
                None => true,
            };
            if font_changed {
                content.set_font(&resource, run.font_size);
                current_font = Some((resource, run.font_size));
            }
            if current_color != Some(run.color) {
                content.set_fill_color(run.color);
                current_color = Some(run.color);
            }
            content
                .set_text_position(transform.x(run.x), transform.y(run.y))
                .show_text(&encode_win_ansi(&run.text));
        }
        content.end_text();
    }
}

fn render_rectangle(
    content: &mut ContentStream,
    transform: &PageTransform,
    bounds: &Rect,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
) {
    content.save_state();
    if let Some(fill) = fill {
        content.set_fill_color(fill);
    }
    if let Some(stroke) = stroke {
        content
            .set_stroke_color(stroke)
            .set_line_width(transform.length(stroke_width));
    }
    // PDF rectangles are anchored at their lower-left corner
    content.rect(
        transform.x(bounds.x),
        transform.y(bounds.bottom()),
        transform.length(bounds.width),
        transform.length(bounds.height),
    );
    match (fill.is_some(), stroke.is_some()) {
        (true, true) => content.fill_and_stroke(),
        (true, false) => content.fill(),
        (false, true) => content.stroke(),
        (false, false) => content.end_path(),
    };
    content.restore_state();
}
