//! Standard Type1 fonts and text encoding
//!
//! Output uses the base-14 fonts only, so nothing is embedded. Text is
//! encoded to WinAnsiEncoding; characters outside it become `?`.

use super::objects::{PdfDictionary, PdfObject};

/// The standard font families we resolve to, in regular/bold/italic/bold-italic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    /// PostScript base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Pick a standard font for a family name. Unknown families map to
    /// Helvetica.
    pub fn resolve(family: &str, bold: bool, italic: bool) -> Self {
        let family = family.to_ascii_lowercase();
        let variants = if family.contains("times") || (family.contains("serif") && !family.contains("sans")) {
            [
                StandardFont::TimesRoman,
                StandardFont::TimesBold,
                StandardFont::TimesItalic,
                StandardFont::TimesBoldItalic,
            ]
        } else if family.contains("courier") || family.contains("mono") {
            [
                StandardFont::Courier,
                StandardFont::CourierBold,
                StandardFont::CourierOblique,
                StandardFont::CourierBoldOblique,
            ]
        } else {
            [
                StandardFont::Helvetica,
                StandardFont::HelveticaBold,
                StandardFont::HelveticaOblique,
                StandardFont::HelveticaBoldOblique,
            ]
        };
        variants[(bold as usize) | ((italic as usize) << 1)]
    }

    /// Font dictionary for this font
    pub fn dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::with_type("Font");
        dict.insert("Subtype", PdfObject::name("Type1"));
        dict.insert("BaseFont", PdfObject::name(self.pdf_name()));
        dict.insert("Encoding", PdfObject::name("WinAnsiEncoding"));
        dict
    }
}

/// A font used on some page, with its resource name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    /// Resource name, e.g. `F1`
    pub name: String,
    pub font: StandardFont,
}

/// Tracks fonts in first-use order so resource names are stable
#[derive(Debug, Default)]
pub struct FontManager {
    fonts: Vec<FontEntry>,
}

impl FontManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource name for a font, registering it on first use
    pub fn resource_for(&mut self, font: StandardFont) -> String {
        if let Some(entry) = self.fonts.iter().find(|e| e.font == font) {
            return entry.name.clone();
        }
        let name = format!("F{}", self.fonts.len() + 1);
        self.fonts.push(FontEntry {
            name: name.clone(),
            font,
        });
        name
    }

    pub fn fonts(&self) -> &[FontEntry] {
        &self.fonts
    }
}

/// Encode text to WinAnsiEncoding bytes
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => code as u8,
        // Tabs render as a single space
        0x09 => b' ',
        _ => match ch {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '•' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        },
    }
}
