//! Exam Model - Canonical exam and report records
//!
//! This crate turns the loosely shaped payloads produced by the question
//! generation service into one canonical record type before any layout runs.
//! Normalization is tolerant: malformed shapes degrade to placeholders and
//! never fail a render.

mod answer;
mod error;
mod exam;
mod options;
mod question;
mod raw;
mod report;

pub use answer::*;
pub use error::*;
pub use exam::*;
pub use options::*;
pub use question::*;
pub use raw::*;
pub use report::*;
