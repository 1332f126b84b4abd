//! PDF Content Stream Generation
//!
//! Builder for the page content operators used by the renderer:
//!
//! - `q`/`Q`: save/restore graphics state
//! - `w`: line width
//! - `g`/`G`, `rg`/`RG`: fill/stroke color
//! - `m`, `l`, `re`: path construction
//! - `S`, `f`, `B`, `n`: path painting
//! - `BT`/`ET`, `Tf`, `Tm`, `Tj`: text

use super::objects::{format_number, write_literal};
use render_model::Color;
use std::fmt::Write as _;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn op(&mut self, operands: &[f64], operator: &str) -> &mut Self {
        let mut line = String::new();
        for v in operands {
            let _ = write!(line, "{} ", format_number(*v));
        }
        line.push_str(operator);
        line.push('\n');
        self.data.extend_from_slice(line.as_bytes());
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.op(&[], "q")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.op(&[], "Q")
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.op(&[width], "w")
    }

    /// Fill color; grays use the shorter `g` operator
    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        if color.is_gray() {
            self.op(&[channel(color.r)], "g")
        } else {
            self.op(&[channel(color.r), channel(color.g), channel(color.b)], "rg")
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        if color.is_gray() {
            self.op(&[channel(color.r)], "G")
        } else {
            self.op(&[channel(color.r), channel(color.g), channel(color.b)], "RG")
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "m")
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "l")
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.op(&[x, y, width, height], "re")
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.op(&[], "S")
    }

    pub fn fill(&mut self) -> &mut Self {
        self.op(&[], "f")
    }

    pub fn fill_and_stroke(&mut self) -> &mut Self {
        self.op(&[], "B")
    }

    /// End the path without painting
    pub fn end_path(&mut self) -> &mut Self {
        self.op(&[], "n")
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.op(&[], "BT")
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.op(&[], "ET")
    }

    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        let line = format!("/{} {} Tf\n", resource, format_number(size));
        self.data.extend_from_slice(line.as_bytes());
        self
    }

    /// Position the next text at `(x, y)` without scaling
    pub fn set_text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[1.0, 0.0, 0.0, 1.0, x, y], "Tm")
    }

    /// Show already-encoded text bytes
    pub fn show_text(&mut self, encoded: &[u8]) -> &mut Self {
        // Writing into a Vec cannot fail
        let _ = write_literal(&mut self.data, encoded);
        self.data.extend_from_slice(b" Tj\n");
        self
    }
}

fn channel(value: u8) -> f64 {
    value as f64 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: &ContentStream) -> String {
        String::from_utf8(content.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_path_operators() {
        let mut c = ContentStream::new();
        c.save_state()
            .set_line_width(0.5)
            .move_to(10.0, 20.0)
            .line_to(30.5, 20.0)
            .stroke()
            .restore_state();
        assert_eq!(text(&c), "q\n0.5 w\n10 20 m\n30.5 20 l\nS\nQ\n");
    }

    #[test]
    fn test_gray_uses_short_operator() {
        let mut c = ContentStream::new();
        c.set_fill_color(Color::BLACK).set_stroke_color(Color::rgb(255, 0, 0));
        assert_eq!(text(&c), "0 g\n1 0 0 RG\n");
    }

    #[test]
    fn test_text_block() {
        let mut c = ContentStream::new();
        c.begin_text()
            .set_font("F1", 11.0)
            .set_text_position(42.5, 800.0)
            .show_text(b"Q (1)")
            .end_text();
        assert_eq!(
            text(&c),
            "BT\n/F1 11 Tf\n1 0 0 1 42.5 800 Tm\n(Q \\(1\\)) Tj\nET\n"
        );
    }
}
