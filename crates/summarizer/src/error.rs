//! Summarizer error types.

use thiserror::Error;

/// Errors that can occur while calling the summarization service.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// Network-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Summarization service returned status {0}")]
    ServerStatus(u16),

    /// The response body did not match the expected shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Result type for summarizer operations.
pub type SummarizerResult<T> = Result<T, SummarizerError>;
