//! Layout Engine - Exam paper and report pagination
//!
//! This crate turns normalized exam and report records into pages of
//! positioned render items. Geometry comes from an explicit [`LayoutConfig`];
//! a single cursor walks down each page and breaks to a new page at fixed
//! thresholds.

mod assembler;
mod canvas;
mod config;
mod error;
mod metrics;
mod question;
mod report;
mod table;
mod text_wrap;

pub use assembler::*;
pub use canvas::*;
pub use config::*;
pub use error::*;
pub use metrics::*;
pub use question::*;
pub use report::*;
pub use table::*;
pub use text_wrap::*;
