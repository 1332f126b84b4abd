//! Exam and report export
//!
//! Render, write the PDF, hand it to the sink, and turn whatever happened
//! into a notification. Nothing here returns an error to the caller.

use crate::pdf::{export_pdf_bytes, PdfExportOptions};
use crate::sink::{DocumentKind, DocumentSink, Notification, SaveOutcome};
use crate::{ExportSettings, Result};
use exam_model::{ExamDocument, ReportData};
use layout_engine::{assemble_exam, assemble_report, ExamLayout, LayoutConfig};
use serde::Serialize;

/// Result of one export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "detail", rename_all = "camelCase")]
pub enum ExportOutcome {
    Delivered(SaveOutcome),
    GenerationFailed { reason: String },
}

/// An export outcome together with the message to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub document: DocumentKind,
    pub file_name: String,
    pub outcome: ExportOutcome,
    pub notification: Notification,
}

impl ExportReport {
    /// True when the file exists somewhere
    pub fn is_saved(&self) -> bool {
        matches!(&self.outcome, ExportOutcome::Delivered(o) if o.is_saved())
    }
}

/// Renders documents and delivers them through a sink
pub struct ExamExporter<S> {
    sink: S,
    layout: LayoutConfig,
    pdf: PdfExportOptions,
}

impl<S: DocumentSink> ExamExporter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            layout: LayoutConfig::default(),
            pdf: PdfExportOptions::default(),
        }
    }

    pub fn from_settings(sink: S, settings: &ExportSettings) -> Self {
        Self::new(sink)
            .with_layout(settings.layout.clone())
            .with_pdf_options(settings.pdf.clone())
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_pdf_options(mut self, pdf: PdfExportOptions) -> Self {
        self.pdf = pdf;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Lay out an exam and write its PDF without saving it
    pub fn render_exam(&self, doc: &ExamDocument) -> Result<(ExamLayout, Vec<u8>)> {
        let layout = assemble_exam(doc, &self.layout)?;
        let mut options = self
            .pdf
            .clone()
            .with_title(format!("{} - {}", doc.subject_name, doc.topic_name))
            .with_subject("Exam Paper")
            .with_creation_date(doc.generated_at);
        options.keywords.push(doc.subject_name.clone());
        let bytes = export_pdf_bytes(&layout.model, &options)?;
        Ok((layout, bytes))
    }

    /// Lay out an analytics report and write its PDF without saving it
    pub fn render_report(&self, data: &ReportData) -> Result<Vec<u8>> {
        let model = assemble_report(data, &self.layout)?;
        let options = self
            .pdf
            .clone()
            .with_title("Analytics Report")
            .with_subject("Analytics & Usage Report")
            .with_creation_date(data.generated_at);
        Ok(export_pdf_bytes(&model, &options)?)
    }

    pub async fn export_exam(&self, doc: &ExamDocument) -> ExportReport {
        let file_name = doc.file_name();
        let rendered = self.render_exam(doc).map(|(layout, bytes)| {
            tracing::info!(
                "Rendered {} questions on {} pages",
                layout.placements.len(),
                layout.page_count()
            );
            bytes
        });
        self.deliver(DocumentKind::Exam, file_name, rendered).await
    }

    pub async fn export_report(&self, data: &ReportData) -> ExportReport {
        let file_name = data.file_name();
        let rendered = self.render_report(data);
        self.deliver(DocumentKind::Report, file_name, rendered).await
    }

    async fn deliver(
        &self,
        document: DocumentKind,
        file_name: String,
        rendered: Result<Vec<u8>>,
    ) -> ExportReport {
        let (outcome, notification) = match rendered {
            Ok(bytes) => {
                let saved = self.sink.save(&file_name, &bytes).await;
                let notification = Notification::for_outcome(document, self.sink.kind(), &saved);
                (ExportOutcome::Delivered(saved), notification)
            }
            Err(e) => {
                tracing::error!("Failed to generate {}: {}", file_name, e);
                (
                    ExportOutcome::GenerationFailed {
                        reason: e.to_string(),
                    },
                    Notification::generation_failed(document),
                )
            }
        };
        tracing::info!("{}", notification);
        ExportReport {
            document,
            file_name,
            outcome,
            notification,
        }
    }
}
