//! Store - PDF output and delivery
//!
//! This crate writes laid-out exam papers and analytics reports as PDF,
//! delivers them through a browser-style or native-style sink, and loads
//! the export settings that configure both.

mod error;
mod exporter;
mod settings;
pub mod pdf;
pub mod sink;

pub use error::*;
pub use exporter::*;
pub use settings::*;
