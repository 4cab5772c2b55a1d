//! Chat summarization collaborator client for Shepherd.
//!
//! The summarization service is an external collaborator with a plain
//! request/response contract: it receives a flattened chat transcript and
//! returns a short natural-language summary. A failed call never affects
//! consultation state; the caller shows a fallback message instead.

mod error;
mod http;

use async_trait::async_trait;

pub use error::*;
pub use http::*;

/// A collaborator that turns a chat transcript into a short summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes the given chat history.
    ///
    /// No retry, caching, or rate limiting: the caller either gets a
    /// summary or surfaces its fallback text.
    async fn summarize(&self, chat_history: &str) -> SummarizerResult<String>;
}
