use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("AI returned text instead of JSON")]
    UnparseableResponse { excerpt: String },

    #[error("AI processing failed: {0}")]
    ExtractionFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

