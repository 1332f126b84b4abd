//! PDF Writer
//!
//! File structure: header, numbered objects, cross-reference table and
//! trailer. Object numbers are allocated in a fixed order (catalog, page
//! tree, info, then content/page pairs, then fonts) so the same render
//! model always produces the same bytes.

use super::document::{catalog, page, page_tree, PdfVersion};
use super::objects::{serialize, PdfDictionary, PdfObject, PdfStream};
use super::options::PdfExportOptions;
use super::renderer::PdfRenderer;
use render_model::{RenderError, RenderModel};
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] RenderError),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level object writer that tracks byte offsets
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset)
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    version: PdfVersion,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, version: PdfVersion) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            version,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    pub fn write_header(&mut self) -> Result<()> {
        let header = format!("%PDF-{}\n", self.version.as_str());
        self.write_bytes(header.as_bytes())?;
        // Binary marker
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> Result<()> {
        self.offsets.push((obj_num, self.position));
        self.write_bytes(format!("{} 0 obj\n", obj_num).as_bytes())?;
        self.write_bytes(&serialize(object)?)?;
        self.write_bytes(b"\nendobj\n")
    }

    /// Write a stream, compressing it first when enabled
    pub fn write_stream(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.compressed {
            stream = compress_stream(stream)?;
        }
        stream.dict.insert("Length", stream.data.len() as i64);
        self.write_object(obj_num, &PdfObject::Stream(stream))
    }

    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: u32) -> Result<()> {
        let xref_offset = self.position;
        let mut entries = std::mem::take(&mut self.offsets);
        entries.sort_by_key(|(num, _)| *num);

        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", self.next_obj_num);
        let mut expected = 1;
        for (num, offset) in &entries {
            while expected < *num {
                table.push_str("0000000000 65535 f \n");
                expected += 1;
            }
            table.push_str(&format!("{:010} 00000 n \n", offset));
            expected = num + 1;
        }
        // Allocated but never written
        while expected < self.next_obj_num {
            table.push_str("0000000000 65535 f \n");
            expected += 1;
        }
        self.write_bytes(table.as_bytes())?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", self.next_obj_num as i64);
        trailer.insert("Root", PdfObject::reference(catalog_ref));
        trailer.insert("Info", PdfObject::reference(info_ref));
        self.write_bytes(b"trailer\n")?;
        self.write_bytes(&serialize(&trailer.into())?)?;
        self.write_bytes(format!("\nstartxref\n{}\n%%EOF\n", xref_offset).as_bytes())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&stream.data)?;
    stream.data = encoder.finish()?;
    stream.compressed = true;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}

/// Writes a whole render model as one PDF document
pub struct PdfDocumentWriter {
    options: PdfExportOptions,
}

impl PdfDocumentWriter {
    pub fn new(options: PdfExportOptions) -> Self {
        Self { options }
    }

    pub fn write<W: Write>(&self, model: &RenderModel, writer: W) -> Result<W> {
        model.validate()?;

        let mut pdf = PdfWriter::new(writer, self.options.pdf_version.into());
        pdf.set_compression(self.options.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();

        // Render first so every font is known before page objects are written
        let mut renderer = PdfRenderer::new(model.points_per_unit);
        let mut rendered = Vec::with_capacity(model.pages.len());
        for page in &model.pages {
            let content = renderer.render_page(page);
            let size = renderer.page_size(page);
            let content_ref = pdf.allocate_object();
            let page_ref = pdf.allocate_object();
            rendered.push((content, size, content_ref, page_ref));
        }

        let fonts: Vec<(String, u32)> = renderer
            .font_manager()
            .fonts()
            .iter()
            .map(|entry| (entry.name.clone(), pdf.allocate_object()))
            .collect();

        pdf.write_object(catalog_ref, &catalog(pages_ref).into())?;
        let kids: Vec<u32> = rendered.iter().map(|(_, _, _, page_ref)| *page_ref).collect();
        pdf.write_object(pages_ref, &page_tree(&kids).into())?;
        pdf.write_object(info_ref, &self.options.document_info().to_dictionary().into())?;

        for (content, (width, height), content_ref, page_ref) in rendered {
            pdf.write_stream(content_ref, PdfStream::new(content.into_bytes()))?;
            let page_dict = page(pages_ref, width, height, content_ref, &fonts);
            pdf.write_object(page_ref, &page_dict.into())?;
        }

        for (entry, (_, font_ref)) in renderer.font_manager().fonts().iter().zip(&fonts) {
            pdf.write_object(*font_ref, &entry.font.dictionary().into())?;
        }

        pdf.write_xref_and_trailer(catalog_ref, info_ref)?;
        tracing::debug!(
            "Wrote PDF with {} pages and {} fonts",
            model.pages.len(),
            fonts.len()
        );
        pdf.finish()
    }

    pub fn write_to_bytes(&self, model: &RenderModel) -> Result<Vec<u8>> {
        self.write(model, Vec::new())
    }
}
