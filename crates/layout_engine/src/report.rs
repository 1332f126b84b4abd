//! Analytics report assembly

use crate::{
    layout_table, ColumnWidth, LayoutConfig, PageCanvas, Result, TableSpec, TableTheme,
    TextStyle, BRAND_DARK, EXAM_TITLE, SUBTITLE_GRAY,
};
use exam_model::ReportData;
use render_model::{Color, Rect, RenderModel};

pub const REPORT_SUBTITLE: &str = "ANALYTICS & USAGE REPORT";

const SECTION_BAR_HEIGHT: f64 = 8.0;
const SECTION_GAP: f64 = 15.0;

/// One titled section of the report
struct Section {
    title: &'static str,
    bar: Color,
    table: TableSpec,
}

/// Lay out the analytics report
pub fn assemble_report(data: &ReportData, config: &LayoutConfig) -> Result<RenderModel> {
    config.validate()?;
    let mut canvas = PageCanvas::new(config);
    let mut y = canvas.y();

    let title = TextStyle::bold(22.0).with_color(BRAND_DARK);
    canvas.text_centered(EXAM_TITLE, y, &title);
    y += 10.0;

    canvas.text_centered(
        REPORT_SUBTITLE,
        y,
        &TextStyle::bold(16.0).with_color(SUBTITLE_GRAY),
    );
    y += 15.0;

    let generated = format!(
        "Generated on: {}",
        data.generated_at.format("%-m/%-d/%Y, %-I:%M:%S %p")
    );
    canvas.text(&generated, config.margin_left, y, crate::Align::Left, &TextStyle::bold(10.0));
    y += 10.0;
    canvas.set_y(y);

    for section in sections(data) {
        render_section(&mut canvas, &section)?;
    }

    Ok(canvas.finish())
}

fn sections(data: &ReportData) -> Vec<Section> {
    let overview = TableSpec::new(["Metric", "Value"])
        .with_rows(data.overview_rows().into_iter().map(Vec::from).collect())
        .with_theme(TableTheme::Striped)
        .with_head_colors(Color::rgb(80, 250, 123), Color::BLACK)
        .with_font_size(11.0)
        .with_padding(4.0)
        .with_columns(vec![ColumnWidth::Fixed(100.0), ColumnWidth::Auto])
        .with_bold_column(0);

    let blooms = TableSpec::new(["Cognitive Level", "Count", "Distribution"])
        .with_rows(data.blooms_rows().into_iter().map(Vec::from).collect())
        .with_theme(TableTheme::Grid)
        .with_head_colors(Color::rgb(155, 134, 197), Color::WHITE);

    let topics = TableSpec::new(["Topic", "Questions", "Coverage"])
        .with_rows(data.topic_rows().into_iter().map(Vec::from).collect())
        .with_theme(TableTheme::Grid)
        .with_head_colors(Color::rgb(255, 160, 60), Color::WHITE);

    vec![
        Section {
            title: "1. OVERVIEW STATISTICS",
            bar: Color::rgb(139, 233, 253),
            table: overview,
        },
        Section {
            title: "2. COGNITIVE LEVEL ANALYSIS (BLOOM'S)",
            bar: Color::rgb(197, 179, 230),
            table: blooms,
        },
        Section {
            title: "3. TOPIC COVERAGE",
            bar: Color::rgb(255, 184, 108),
            table: topics,
        },
    ]
}

fn render_section(canvas: &mut PageCanvas<'_>, section: &Section) -> Result<()> {
    let config = canvas.config();
    // Bar plus the gap to the table
    canvas.ensure_room(12.0);

    let y = canvas.y();
    canvas.rect(
        Rect::new(config.margin_left, y, config.content_width(), SECTION_BAR_HEIGHT),
        Some(section.bar),
        None,
    );
    canvas.text(
        section.title,
        config.margin_left + 2.0,
        y + 6.0,
        crate::Align::Left,
        &TextStyle::bold(14.0),
    );
    canvas.set_y(y + 12.0);

    let end = layout_table(canvas, &section.table)?;
    canvas.set_y(end.y + SECTION_GAP);
    Ok(())
}
