//! PDF Object Model
//!
//! The small subset of the PDF object grammar needed to write exam papers
//! and reports:
//! - Null, booleans, integers and reals
//! - Literal and hex strings
//! - Names, arrays and dictionaries
//! - Streams and indirect references
//!
//! Dictionaries keep their keys sorted so serialized output is stable.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// A PDF object
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(PdfString),
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    Stream(PdfStream),
    /// Indirect reference (object number, generation)
    Reference(u32, u16),
}

impl PdfObject {
    pub fn name(name: impl Into<String>) -> Self {
        PdfObject::Name(name.into())
    }

    /// Reference to generation 0 of an object
    pub fn reference(obj_num: u32) -> Self {
        PdfObject::Reference(obj_num, 0)
    }

    /// A text string suitable for the info dictionary
    pub fn text(text: &str) -> Self {
        PdfObject::String(PdfString::text(text))
    }
}

impl From<bool> for PdfObject {
    fn from(v: bool) -> Self {
        PdfObject::Boolean(v)
    }
}

impl From<i64> for PdfObject {
    fn from(v: i64) -> Self {
        PdfObject::Integer(v)
    }
}

impl From<f64> for PdfObject {
    fn from(v: f64) -> Self {
        PdfObject::Real(v)
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(v: PdfDictionary) -> Self {
        PdfObject::Dictionary(v)
    }
}

impl From<Vec<PdfObject>> for PdfObject {
    fn from(v: Vec<PdfObject>) -> Self {
        PdfObject::Array(v)
    }
}

/// A PDF string
#[derive(Debug, Clone, PartialEq)]
pub enum PdfString {
    /// `(...)` with escapes
    Literal(Vec<u8>),
    /// `<...>`
    Hex(Vec<u8>),
}

impl PdfString {
    /// ASCII text stays literal; anything else becomes UTF-16BE with a BOM
    pub fn text(text: &str) -> Self {
        if text.is_ascii() {
            PdfString::Literal(text.as_bytes().to_vec())
        } else {
            let mut bytes = vec![0xFE, 0xFF];
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
            PdfString::Hex(bytes)
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            PdfString::Literal(b) | PdfString::Hex(b) => b,
        }
    }
}

/// A PDF dictionary with sorted keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary with `/Type` already set
    pub fn with_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", PdfObject::name(type_name));
        dict
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PdfObject>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter()
    }
}

/// A stream object
#[derive(Debug, Clone, PartialEq)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
    /// Set once a filter has been applied to `data`
    pub compressed: bool,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
            compressed: false,
        }
    }
}

/// Format a number the way content streams expect it: no exponent,
/// at most four decimals, trailing zeros dropped
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == rounded.trunc() {
        // Avoids "-0"
        return format!("{}", rounded as i64);
    }
    let s = format!("{:.4}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Write a literal string body with escapes, including the parentheses
pub fn write_literal<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(b"(")?;
    for &b in bytes {
        match b {
            b'(' | b')' | b'\\' => out.write_all(&[b'\\', b])?,
            b'\n' => out.write_all(b"\\n")?,
            b'\r' => out.write_all(b"\\r")?,
            _ => out.write_all(&[b])?,
        }
    }
    out.write_all(b")")
}

/// Serializes objects to a byte sink
pub struct PdfSerializer<W: Write> {
    out: W,
}

impl<W: Write> PdfSerializer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_object(&mut self, object: &PdfObject) -> io::Result<()> {
        match object {
            PdfObject::Null => self.out.write_all(b"null"),
            PdfObject::Boolean(v) => write!(self.out, "{}", v),
            PdfObject::Integer(v) => write!(self.out, "{}", v),
            PdfObject::Real(v) => self.out.write_all(format_number(*v).as_bytes()),
            PdfObject::String(s) => self.write_string(s),
            PdfObject::Name(n) => self.write_name(n),
            PdfObject::Array(items) => {
                self.out.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.write_all(b" ")?;
                    }
                    self.write_object(item)?;
                }
                self.out.write_all(b"]")
            }
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Stream(stream) => {
                self.write_dictionary(&stream.dict)?;
                self.out.write_all(b"\nstream\n")?;
                self.out.write_all(&stream.data)?;
                self.out.write_all(b"\nendstream")
            }
            PdfObject::Reference(num, gen) => write!(self.out, "{} {} R", num, gen),
        }
    }

    fn write_string(&mut self, s: &PdfString) -> io::Result<()> {
        match s {
            PdfString::Literal(bytes) => write_literal(&mut self.out, bytes),
            PdfString::Hex(bytes) => {
                self.out.write_all(b"<")?;
                for b in bytes {
                    write!(self.out, "{:02X}", b)?;
                }
                self.out.write_all(b">")
            }
        }
    }

    fn write_name(&mut self, name: &str) -> io::Result<()> {
        self.out.write_all(b"/")?;
        for &b in name.as_bytes() {
            let delimiter = matches!(
                b,
                b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
            );
            if (0x21..=0x7E).contains(&b) && !delimiter {
                self.out.write_all(&[b])?;
            } else {
                write!(self.out, "#{:02X}", b)?;
            }
        }
        Ok(())
    }

    fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        self.out.write_all(b"<<")?;
        for (key, value) in dict.iter() {
            self.write_name(key)?;
            self.out.write_all(b" ")?;
            self.write_object(value)?;
        }
        self.out.write_all(b">>")
    }
}

/// Serialize a single object to bytes
pub fn serialize(object: &PdfObject) -> io::Result<Vec<u8>> {
    let mut serializer = PdfSerializer::new(Vec::new());
    serializer.write_object(object)?;
    Ok(serializer.into_inner())
}
