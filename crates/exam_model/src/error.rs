//! Error types for the exam model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
