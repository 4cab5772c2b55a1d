//! HTTP client for the summarization service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Summarizer, SummarizerError, SummarizerResult};

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    chat_history: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Client for the hosted summarization endpoint.
pub struct HttpSummarizer {
    /// Service endpoint URL.
    endpoint: String,
    /// Bearer token, if the service requires one.
    api_key: Option<String>,
    /// HTTP client.
    http_client: reqwest::Client,
}

impl HttpSummarizer {
    /// Creates a new client for the given endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: None,
            http_client: reqwest::Client::new(),
        }
    }

    /// Sets the bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, chat_history: &str) -> SummarizerResult<String> {
        debug!(transcript_len = chat_history.len(), "Requesting chat summary");

        let mut request = self
            .http_client
            .post(&self.endpoint)
            .json(&SummarizeRequest { chat_history });
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummarizerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SummarizerError::ServerStatus(response.status().as_u16()));
        }

        let body: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::Deserialization(e.to_string()))?;

        Ok(body.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let json = serde_json::to_string(&SummarizeRequest {
            chat_history: "Abel: hi\nSara: hello",
        })
        .unwrap();
        assert_eq!(json, "{\"chat_history\":\"Abel: hi\\nSara: hello\"}");
    }

    #[test]
    fn test_response_wire_shape() {
        let body: SummarizeResponse =
            serde_json::from_str("{\"summary\":\"They greeted each other.\"}").unwrap();
        assert_eq!(body.summary, "They greeted each other.");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        let client = HttpSummarizer::new("http://127.0.0.1:1/summarize");
        let err = client.summarize("Abel: hi").await.unwrap_err();
        assert!(matches!(err, SummarizerError::Network(_)));
    }
}
