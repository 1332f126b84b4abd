//! PDF Export Module
//!
//! Writes a laid-out [`render_model::RenderModel`] as a PDF file.
//!
//! # Architecture
//!
//! - `objects`: PDF object model and serializer
//! - `document`: catalog, page tree, page and info dictionaries
//! - `content`: content stream operators
//! - `fonts`: standard Type1 fonts and WinAnsi text encoding
//! - `renderer`: render items to content streams (unit scaling, y flip)
//! - `options`: export configuration
//! - `writer`: object numbering, xref and trailer
//! - `api`: public entry points

mod api;
mod content;
mod document;
mod fonts;
mod objects;
mod options;
mod renderer;
mod writer;

pub use api::*;
pub use fonts::{encode_win_ansi, StandardFont};
pub use options::*;
pub use writer::{PdfError, Result as PdfResult};
