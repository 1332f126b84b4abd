//! Error types for export and storage

use crate::pdf::PdfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Payload error: {0}")]
    Model(#[from] exam_model::ModelError),

    #[error("Layout error: {0}")]
    Layout(#[from] layout_engine::LayoutError),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures inside a sink capability. Sinks turn these into outcomes.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid payload encoding: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error("Invalid target path: {0}")]
    InvalidPath(String),

    #[error("Could not open file: {0}")]
    OpenFailed(String),
}
