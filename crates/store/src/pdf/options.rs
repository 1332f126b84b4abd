//! PDF Export Options

use super::document::{DocumentInfo, PdfVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CREATOR: &str = "AI Exam Oracle";

/// Options for PDF export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PdfExportOptions {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Vec<String>,
    pub creator: Option<String>,
    /// Flate-compress content streams
    pub compress: bool,
    pub pdf_version: PdfVersionOption,
    /// Written as the info CreationDate; omitted when unset so output
    /// stays byte-identical across runs
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            keywords: Vec::new(),
            creator: Some(DEFAULT_CREATOR.to_string()),
            compress: true,
            pdf_version: PdfVersionOption::default(),
            creation_date: None,
        }
    }
}

/// PDF version option for serialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfVersionOption {
    #[default]
    V14,
    V15,
    V17,
}

impl From<PdfVersionOption> for PdfVersion {
    fn from(opt: PdfVersionOption) -> Self {
        match opt {
            PdfVersionOption::V14 => PdfVersion::V1_4,
            PdfVersionOption::V15 => PdfVersion::V1_5,
            PdfVersionOption::V17 => PdfVersion::V1_7,
        }
    }
}

impl PdfExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_version(mut self, version: PdfVersionOption) -> Self {
        self.pdf_version = version;
        self
    }

    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Info dictionary contents for these options
    pub fn document_info(&self) -> DocumentInfo {
        DocumentInfo {
            title: self.title.clone(),
            author: self.author.clone(),
            subject: self.subject.clone(),
            keywords: self.keywords.clone(),
            creator: self.creator.clone(),
            producer: Some(format!("{} PDF Export", DEFAULT_CREATOR)),
            creation_date: self.creation_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = PdfExportOptions::default();
        assert!(opts.compress);
        assert!(opts.title.is_none());
        assert_eq!(opts.pdf_version, PdfVersionOption::V14);
        assert_eq!(opts.creator.as_deref(), Some(DEFAULT_CREATOR));
    }

    #[test]
    fn test_builder_pattern() {
        let opts = PdfExportOptions::new()
            .with_title("Physics - Optics")
            .with_author("Dept. of Physics")
            .with_keyword("exam")
            .with_compression(false)
            .with_version(PdfVersionOption::V17);

        let info = opts.document_info();
        assert_eq!(info.title.as_deref(), Some("Physics - Optics"));
        assert_eq!(info.author.as_deref(), Some("Dept. of Physics"));
        assert_eq!(info.keywords, vec!["exam".to_string()]);
        assert!(!opts.compress);
        assert_eq!(PdfVersion::from(opts.pdf_version), PdfVersion::V1_7);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: PdfExportOptions =
            serde_json::from_str(r#"{"compress": false, "pdfVersion": "v15"}"#).unwrap();
        assert!(!opts.compress);
        assert_eq!(opts.pdf_version, PdfVersionOption::V15);
        assert_eq!(opts.creator.as_deref(), Some(DEFAULT_CREATOR));
    }
}
