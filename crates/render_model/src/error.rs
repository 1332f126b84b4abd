//! Error types for render model

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Render model has no pages")]
    NoPages,

    #[error("Page {index} has invalid dimensions {width}x{height}")]
    InvalidPageSize { index: u32, width: f64, height: f64 },

    #[error("Invalid unit scale: {0}")]
    InvalidScale(f64),
}

pub type Result<T> = std::result::Result<T, RenderError>;
