//! Table layout
//!
//! Handles:
//! - Column widths (fixed, auto sharing the remaining width)
//! - Cell text wrapping and row heights
//! - Grid and striped themes
//! - Header row repeat across pages
//! - Splitting a row that is taller than a fresh page

use crate::{LayoutError, PageCanvas, RenderCursor, Result, TextStyle};
use render_model::{Color, Rect};

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f64 = 1.15;

/// Baseline position within a line, as a fraction of the line height
const BASELINE_RATIO: f64 = 0.78;

/// Smallest width an auto column shrinks to
const MIN_AUTO_WIDTH: f64 = 10.0;

/// Column width rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Exact width in layout units
    Fixed(f64),
    /// Equal share of the width the fixed columns leave
    Auto,
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableTheme {
    /// Every cell bordered
    Grid,
    /// Alternate body rows shaded, no borders
    Striped,
}

impl TableTheme {
    fn body_text(&self) -> Color {
        match self {
            TableTheme::Grid => Color::gray(80),
            TableTheme::Striped => Color::gray(20),
        }
    }
}

/// Shade for alternate rows in the striped theme
pub const STRIPE_FILL: Color = Color::gray(245);

/// Border color in the grid theme
pub const GRID_LINE: Color = Color::gray(200);

/// A table to lay out
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    /// Width rules by column; missing entries are `Auto`
    pub columns: Vec<ColumnWidth>,
    pub theme: TableTheme,
    /// Font size in points
    pub font_size: f64,
    /// Cell padding in layout units
    pub cell_padding: f64,
    pub head_fill: Color,
    pub head_text: Color,
    /// Body columns drawn in bold
    pub bold_columns: Vec<usize>,
    /// Redraw the header at the top of each continuation page
    pub repeat_head: bool,
}

impl TableSpec {
    pub fn new<I, S>(head: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            head: head.into_iter().map(Into::into).collect(),
            body: Vec::new(),
            columns: Vec::new(),
            theme: TableTheme::Striped,
            font_size: 10.0,
            cell_padding: 5.0 / crate::POINTS_PER_MM,
            head_fill: Color::rgb(41, 128, 185),
            head_text: Color::WHITE,
            bold_columns: Vec::new(),
            repeat_head: true,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.body = rows;
        self
    }

    pub fn with_columns(mut self, columns: Vec<ColumnWidth>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_theme(mut self, theme: TableTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.cell_padding = padding;
        self
    }

    pub fn with_head_colors(mut self, fill: Color, text: Color) -> Self {
        self.head_fill = fill;
        self.head_text = text;
        self
    }

    pub fn with_bold_column(mut self, column: usize) -> Self {
        self.bold_columns.push(column);
        self
    }

    pub fn column_count(&self) -> usize {
        self.body
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.head.len()))
            .max()
            .unwrap_or(0)
    }

    /// Resolve column widths against the available width
    pub fn resolve_widths(&self, available: f64) -> Vec<f64> {
        let count = self.column_count();
        let rule = |i: usize| self.columns.get(i).copied().unwrap_or(ColumnWidth::Auto);

        let fixed: f64 = (0..count)
            .filter_map(|i| match rule(i) {
                ColumnWidth::Fixed(w) => Some(w),
                ColumnWidth::Auto => None,
            })
            .sum();
        let auto_count = (0..count)
            .filter(|&i| rule(i) == ColumnWidth::Auto)
            .count();
        let auto_width = if auto_count > 0 {
            ((available - fixed) / auto_count as f64).max(MIN_AUTO_WIDTH)
        } else {
            0.0
        };

        (0..count)
            .map(|i| match rule(i) {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Auto => auto_width,
            })
            .collect()
    }
}

/// Which part of the table a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Head,
    Body(usize),
}

/// Wrapped cell lines for one row
type RowLines = Vec<Vec<String>>;

struct TablePainter<'s> {
    spec: &'s TableSpec,
    widths: Vec<f64>,
    left: f64,
    line_height: f64,
}

impl TablePainter<'_> {
    fn style(&self, kind: RowKind, column: usize) -> TextStyle {
        match kind {
            RowKind::Head => TextStyle::bold(self.spec.font_size).with_color(self.spec.head_text),
            RowKind::Body(_) => {
                let style = if self.spec.bold_columns.contains(&column) {
                    TextStyle::bold(self.spec.font_size)
                } else {
                    TextStyle::normal(self.spec.font_size)
                };
                style.with_color(self.spec.theme.body_text())
            }
        }
    }

    fn wrap_row(&self, canvas: &PageCanvas<'_>, cells: &[String], kind: RowKind) -> RowLines {
        let pad = self.spec.cell_padding;
        self.widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let text = cells.get(i).map(String::as_str).unwrap_or("");
                let style = self.style(kind, i);
                canvas.wrap(text, &style, (width - 2.0 * pad).max(1.0))
            })
            .collect()
    }

    fn height_for(&self, line_count: usize) -> f64 {
        line_count.max(1) as f64 * self.line_height + 2.0 * self.spec.cell_padding
    }

    fn row_height(&self, lines: &RowLines) -> f64 {
        self.height_for(lines.iter().map(Vec::len).max().unwrap_or(1))
    }

    fn fill(&self, kind: RowKind) -> Option<Color> {
        match (kind, self.spec.theme) {
            (RowKind::Head, _) => Some(self.spec.head_fill),
            (RowKind::Body(i), TableTheme::Striped) if i % 2 == 0 => Some(STRIPE_FILL),
            (RowKind::Body(_), _) => None,
        }
    }

    fn draw_all(&self, canvas: &mut PageCanvas<'_>, lines: &RowLines, kind: RowKind) {
        let count = lines.iter().map(Vec::len).max().unwrap_or(1);
        self.draw(canvas, lines, 0, count, kind);
    }

    /// Draw lines `from..from + count` of every cell at the cursor and advance
    fn draw(
        &self,
        canvas: &mut PageCanvas<'_>,
        lines: &RowLines,
        from: usize,
        count: usize,
        kind: RowKind,
    ) {
        let top = canvas.y();
        let height = self.height_for(count);
        let stroke = match self.spec.theme {
            TableTheme::Grid => Some(GRID_LINE),
            TableTheme::Striped => None,
        };
        let fill = self.fill(kind);
        let pad = self.spec.cell_padding;

        let mut x = self.left;
        for (column, (width, cell)) in self.widths.iter().zip(lines).enumerate() {
            if fill.is_some() || stroke.is_some() {
                canvas.rect(Rect::new(x, top, *width, height), fill, stroke);
            }
            let style = self.style(kind, column);
            for (k, line) in cell.iter().skip(from).take(count).enumerate() {
                let baseline = top + pad + (k as f64 + BASELINE_RATIO) * self.line_height;
                canvas.text(line, x + pad, baseline, crate::Align::Left, &style);
            }
            x += width;
        }
        canvas.set_y(top + height);
    }
}

/// Lay out a table at the cursor; returns the cursor below the last row
pub fn layout_table(canvas: &mut PageCanvas<'_>, spec: &TableSpec) -> Result<RenderCursor> {
    let config = canvas.config();
    if spec.column_count() == 0 {
        return Err(LayoutError::InvalidTable("table has no columns".to_string()));
    }
    if !(spec.font_size.is_finite() && spec.font_size > 0.0) || spec.cell_padding < 0.0 {
        return Err(LayoutError::InvalidTable(format!(
            "font size {} / padding {}",
            spec.font_size, spec.cell_padding
        )));
    }

    let painter = TablePainter {
        spec,
        widths: spec.resolve_widths(config.content_width()),
        left: config.margin_left,
        line_height: config.points_to_units(spec.font_size * LINE_HEIGHT_FACTOR),
    };
    let bottom = config.bottom_limit();

    let head = painter.wrap_row(canvas, &spec.head, RowKind::Head);
    let head_height = if spec.head.is_empty() {
        0.0
    } else {
        painter.row_height(&head)
    };
    let body: Vec<RowLines> = spec
        .body
        .iter()
        .enumerate()
        .map(|(i, row)| painter.wrap_row(canvas, row, RowKind::Body(i)))
        .collect();

    // Keep the header with the first body row
    let first_height = body.first().map(|r| painter.row_height(r)).unwrap_or(0.0);
    if canvas.y() + head_height + first_height > bottom && canvas.y() > config.margin_top {
        canvas.break_page();
    }
    if head_height > 0.0 {
        painter.draw_all(canvas, &head, RowKind::Head);
    }

    let mut rows_on_page = 0usize;
    for (index, lines) in body.iter().enumerate() {
        let total = lines.iter().map(Vec::len).max().unwrap_or(1);
        let mut from = 0;

        while from < total {
            let remaining = total - from;
            if canvas.y() + painter.height_for(remaining) <= bottom {
                painter.draw(canvas, lines, from, remaining, RowKind::Body(index));
                rows_on_page += 1;
                break;
            }

            if rows_on_page == 0 {
                // Row is taller than what a fresh page offers: split it
                let room = bottom - canvas.y() - 2.0 * spec.cell_padding;
                let fit = ((room / painter.line_height).floor() as usize).clamp(1, remaining);
                painter.draw(canvas, lines, from, fit, RowKind::Body(index));
                from += fit;
                if from >= total {
                    rows_on_page += 1;
                    break;
                }
            }

            tracing::debug!("Table row {} continues on a new page", index);
            canvas.break_page();
            rows_on_page = 0;
            if spec.repeat_head && head_height > 0.0 {
                painter.draw_all(canvas, &head, RowKind::Head);
            }
        }
    }

    Ok(canvas.cursor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutConfig;
    use render_model::RenderItem;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|i| vec![format!("Q{}", i + 1), format!("answer {}", i)])
            .collect()
    }

    #[test]
    fn test_resolve_widths() {
        let spec = TableSpec::new(["Q", "Type", "Answer", "Marks"]).with_columns(vec![
            ColumnWidth::Fixed(15.0),
            ColumnWidth::Fixed(20.0),
            ColumnWidth::Auto,
            ColumnWidth::Fixed(20.0),
        ]);
        assert_eq!(spec.resolve_widths(180.0), vec![15.0, 20.0, 125.0, 20.0]);

        let spec = TableSpec::new(["a", "b", "c"]);
        assert_eq!(spec.resolve_widths(180.0), vec![60.0, 60.0, 60.0]);
    }

    #[test]
    fn test_empty_table_is_error() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        let spec = TableSpec::new(Vec::<String>::new());
        assert!(layout_table(&mut canvas, &spec).is_err());
    }

    #[test]
    fn test_final_cursor_below_rows() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        let spec = TableSpec::new(["Q", "Answer"])
            .with_rows(rows(3))
            .with_padding(3.0)
            .with_font_size(9.0);
        let cursor = layout_table(&mut canvas, &spec).unwrap();

        let line = config.points_to_units(9.0 * LINE_HEIGHT_FACTOR);
        let row = line + 6.0;
        assert_eq!(cursor.page_index, 0);
        assert!((cursor.y - (15.0 + 4.0 * row)).abs() < 1e-9);
    }

    #[test]
    fn test_header_repeats_on_break() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        let spec = TableSpec::new(["Q", "Answer"])
            .with_theme(TableTheme::Grid)
            .with_rows(rows(60))
            .with_padding(3.0);
        let cursor = layout_table(&mut canvas, &spec).unwrap();
        let model = canvas.finish();

        assert!(cursor.page_index >= 1);
        for page in &model.pages {
            assert!(page.contains_text("Answer"), "header missing on page {}", page.page_index);
            assert!(page.max_item_y() <= config.bottom_limit() + 1e-9);
        }
        assert!(model.pages.last().unwrap().contains_text("Q60"));
    }

    #[test]
    fn test_tall_row_is_split() {
        let config = LayoutConfig::custom(100.0, 80.0).with_margins(10.0);
        let mut canvas = PageCanvas::new(&config);
        let long = "word ".repeat(200);
        let spec = TableSpec::new(["Text"]).with_rows(vec![vec![long]]);
        layout_table(&mut canvas, &spec).unwrap();
        let model = canvas.finish();

        assert!(model.page_count() > 1);
        for page in &model.pages {
            assert!(page.max_item_y() <= config.bottom_limit() + 1e-9);
        }
    }

    #[test]
    fn test_striped_fills_alternate_rows() {
        let config = LayoutConfig::a4();
        let mut canvas = PageCanvas::new(&config);
        let spec = TableSpec::new(["Metric", "Value"]).with_rows(rows(4));
        layout_table(&mut canvas, &spec).unwrap();
        let model = canvas.finish();

        let striped = model.pages[0]
            .items
            .iter()
            .filter(|i| matches!(i, RenderItem::Rectangle { fill: Some(c), .. } if *c == STRIPE_FILL))
            .count();
        // Rows 0 and 2, two cells each
        assert_eq!(striped, 4);
    }
}
