//! PDF Document Structure
//!
//! Catalog, page tree, page and info dictionaries.

use super::objects::{PdfDictionary, PdfObject};
use chrono::{DateTime, Utc};

/// PDF version written in the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PdfVersion {
    #[default]
    V1_4,
    V1_5,
    V1_7,
}

impl PdfVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_5 => "1.5",
            PdfVersion::V1_7 => "1.7",
        }
    }
}

/// Document information dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Vec<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        let fields = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                dict.insert(key, PdfObject::text(value));
            }
        }
        if !self.keywords.is_empty() {
            dict.insert("Keywords", PdfObject::text(&self.keywords.join(", ")));
        }
        if let Some(date) = self.creation_date {
            dict.insert("CreationDate", PdfObject::text(&pdf_date(date)));
        }
        dict
    }
}

/// `D:YYYYMMDDHHmmSS+00'00'`
pub fn pdf_date(date: DateTime<Utc>) -> String {
    format!("D:{}+00'00'", date.format("%Y%m%d%H%M%S"))
}

pub fn catalog(pages_ref: u32) -> PdfDictionary {
    let mut dict = PdfDictionary::with_type("Catalog");
    dict.insert("Pages", PdfObject::reference(pages_ref));
    dict
}

/// Flat page tree root
pub fn page_tree(kids: &[u32]) -> PdfDictionary {
    let mut dict = PdfDictionary::with_type("Pages");
    dict.insert(
        "Kids",
        PdfObject::Array(kids.iter().map(|&k| PdfObject::reference(k)).collect()),
    );
    dict.insert("Count", kids.len() as i64);
    dict
}

/// A page object; `fonts` pairs resource names with font object numbers
pub fn page(
    parent: u32,
    width_pt: f64,
    height_pt: f64,
    contents: u32,
    fonts: &[(String, u32)],
) -> PdfDictionary {
    let mut dict = PdfDictionary::with_type("Page");
    dict.insert("Parent", PdfObject::reference(parent));
    dict.insert(
        "MediaBox",
        PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(width_pt),
            PdfObject::Real(height_pt),
        ]),
    );
    dict.insert("Contents", PdfObject::reference(contents));

    let mut resources = PdfDictionary::new();
    if !fonts.is_empty() {
        let mut font_dict = PdfDictionary::new();
        for (name, obj) in fonts {
            font_dict.insert(name.clone(), PdfObject::reference(*obj));
        }
        resources.insert("Font", font_dict);
    }
    resources.insert(
        "ProcSet",
        PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("Text")]),
    );
    dict.insert("Resources", resources);
    dict
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_info_dictionary() {
        let info = DocumentInfo {
            title: Some("Physics Exam".to_string()),
            keywords: vec!["exam".to_string(), "optics".to_string()],
            creation_date: Some(Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()),
            ..Default::default()
        };
        let dict = info.to_dictionary();
        assert_eq!(dict.get("Title"), Some(&PdfObject::text("Physics Exam")));
        assert_eq!(dict.get("Keywords"), Some(&PdfObject::text("exam, optics")));
        assert_eq!(
            dict.get("CreationDate"),
            Some(&PdfObject::text("D:20240115093000+00'00'"))
        );
        assert!(dict.get("Author").is_none());
    }

    #[test]
    fn test_page_tree_count() {
        let tree = page_tree(&[4, 6, 8]);
        assert_eq!(tree.get("Count"), Some(&PdfObject::Integer(3)));
    }
}
