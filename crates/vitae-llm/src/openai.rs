//! OpenAI-compatible transport
//!
//! Posts chat-completion requests to `{base}/v1/chat/completions` with
//! optional bearer authentication, retrying transient failures with
//! exponential backoff.

use crate::TransportError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use vitae_domain::{ChatRequest, ChatResponse, ChatTransport};

/// Default request timeout (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts for transient failures
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP transport for an OpenAI-compatible chat-completions endpoint
pub struct OpenAiTransport {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
    max_retries: u32,
}

impl OpenAiTransport {
    /// Create a transport against `base_url` (e.g. "https://api.openai.com")
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| TransportError::Http(format!("client build failed: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the bearer token sent with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Whether a status is worth retrying
    fn is_transient(status: reqwest::StatusCode) -> bool {
        status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
    }

    async fn send_once(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        let mut builder = self.client.post(self.endpoint()).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Http(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TransportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| TransportError::InvalidResponse(format!("body parse failed: {}", e)))?;

        if parsed.content().is_none() {
            return Err(TransportError::EmptyContent);
        }
        Ok(parsed)
    }
}

#[async_trait]
impl ChatTransport for OpenAiTransport {
    type Error = TransportError;

    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, Self::Error> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.send_once(&request).await {
                Ok(response) => {
                    debug!(model = %request.model, attempts, "chat completion succeeded");
                    return Ok(response);
                }
                Err(TransportError::Api { status, message }) if !Self::is_transient(
                    reqwest::StatusCode::from_u16(status)
                        .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
                ) =>
                {
                    // Client errors will not improve on retry
                    return Err(TransportError::Api { status, message });
                }
                Err(e @ (TransportError::InvalidResponse(_) | TransportError::EmptyContent)) => {
                    return Err(e);
                }
                Err(e) => {
                    warn!(attempt = attempts + 1, error = %e, "chat completion attempt failed");
                    last_error = Some(e);
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| TransportError::Http("max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        let transport = OpenAiTransport::new("http://localhost:8000/").unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:8000/v1/chat/completions");
    }

    #[test]
    fn test_transient_statuses() {
        assert!(OpenAiTransport::is_transient(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(OpenAiTransport::is_transient(
            reqwest::StatusCode::TOO_MANY_REQUESTS
        ));
        assert!(!OpenAiTransport::is_transient(
            reqwest::StatusCode::UNAUTHORIZED
        ));
        assert!(!OpenAiTransport::is_transient(reqwest::StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors() {
        let transport = OpenAiTransport::new("http://127.0.0.1:1")
            .unwrap()
            .with_max_retries(1);

        let result = transport.send(ChatRequest::user("gpt-4", "test")).await;
        assert!(matches!(result, Err(TransportError::Http(_))));
    }
}
