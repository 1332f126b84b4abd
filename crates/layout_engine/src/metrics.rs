//! Standard font metrics
//!
//! Advance widths from the Adobe AFM files for the base-14 fonts, in 1/1000
//! of an em, for the printable ASCII range. Characters outside the table use
//! the font's average width.

/// Helvetica widths for U+0020..=U+007E
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold widths for U+0020..=U+007E
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Times-Roman widths for U+0020..=U+007E
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278, // ' '..'/'
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, // '0'..'9'
    278, 278, 564, 564, 564, 444, 921, // ':'..'@'
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, // 'A'..'M'
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, // 'N'..'Z'
    333, 278, 333, 469, 500, 333, // '['..'`'
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, // 'a'..'m'
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, // 'n'..'z'
    480, 200, 480, 541, // '{'..'~'
];

/// Times-Bold widths for U+0020..=U+007E
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278, // ' '..'/'
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, // '0'..'9'
    333, 333, 570, 570, 570, 500, 930, // ':'..'@'
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, // 'A'..'M'
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, // 'N'..'Z'
    333, 278, 333, 581, 500, 333, // '['..'`'
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, // 'a'..'m'
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, // 'n'..'z'
    394, 220, 394, 520, // '{'..'~'
];

/// Metrics for one face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontMetrics {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    /// Every Courier face is monospaced at 600
    Courier,
}

impl FontMetrics {
    /// Pick metrics for a family name, matching the standard font the PDF
    /// writer draws it with. Unknown families measure as Helvetica.
    pub fn for_family(family: &str, bold: bool) -> Self {
        let family = family.to_ascii_lowercase();
        if family.contains("times") || (family.contains("serif") && !family.contains("sans")) {
            if bold {
                FontMetrics::TimesBold
            } else {
                FontMetrics::TimesRoman
            }
        } else if family.contains("courier") || family.contains("mono") {
            FontMetrics::Courier
        } else if bold {
            FontMetrics::HelveticaBold
        } else {
            FontMetrics::Helvetica
        }
    }

    /// Advance width of one character in 1/1000 em
    pub fn char_width(&self, ch: char) -> u16 {
        let table = match self {
            FontMetrics::Courier => return 600,
            FontMetrics::Helvetica => &HELVETICA,
            FontMetrics::HelveticaBold => &HELVETICA_BOLD,
            FontMetrics::TimesRoman => &TIMES_ROMAN,
            FontMetrics::TimesBold => &TIMES_BOLD,
        };
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            table[(code - 0x20) as usize]
        } else {
            self.average_width()
        }
    }

    fn average_width(&self) -> u16 {
        match self {
            FontMetrics::Helvetica => 556,
            FontMetrics::HelveticaBold => 611,
            FontMetrics::TimesRoman | FontMetrics::TimesBold => 500,
            FontMetrics::Courier => 600,
        }
    }

    /// Width of a string in points at the given size
    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        f64::from(units) * font_size / 1000.0
    }
}
