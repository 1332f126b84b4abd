//! PDF Export Public API

use super::options::PdfExportOptions;
use super::writer::{PdfDocumentWriter, Result};
use render_model::RenderModel;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Export a render model to PDF bytes in memory
///
/// # Example
///
/// ```ignore
/// use store::pdf::{export_pdf_bytes, PdfExportOptions};
///
/// let layout = layout_engine::assemble_exam(&doc, &LayoutConfig::a4())?;
/// let bytes = export_pdf_bytes(&layout.model, &PdfExportOptions::default())?;
/// ```
pub fn export_pdf_bytes(model: &RenderModel, options: &PdfExportOptions) -> Result<Vec<u8>> {
    PdfDocumentWriter::new(options.clone()).write_to_bytes(model)
}

/// Export a render model straight to a file
pub fn export_pdf(
    model: &RenderModel,
    path: impl AsRef<Path>,
    options: &PdfExportOptions,
) -> Result<()> {
    let file = File::create(path)?;
    PdfDocumentWriter::new(options.clone()).write(model, BufWriter::new(file))?;
    Ok(())
}
