//! OpenAI-compatible chat completion client.
//!
//! Issues a single POST to `{base_url}/chat/completions` per caption
//! variant. Each call is attempted exactly once; only the HTTP client's
//! own timeout applies.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::GenerationParams;
use crate::error::LlmError;
use crate::llm::{CaptionModel, GenerationRequest, GenerationResponse};

/// Request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    /// HTTP client for making API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Base URL for the API.
    base_url: String,
}

impl OpenAiClient {
    /// Create a new client for the given endpoint and key.
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client - system TLS configuration error"),
            api_key,
            base_url,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API key (for debugging, returns masked value).
    pub fn api_key_masked(&self) -> String {
        if self.api_key.len() <= 8 {
            "*".repeat(self.api_key.len())
        } else {
            format!(
                "{}...{}",
                &self.api_key[..4],
                &self.api_key[self.api_key.len() - 4..]
            )
        }
    }

    /// Execute a single chat completion request.
    async fn execute_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let http_response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = http_response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = http_response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());

            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(LlmError::ApiError {
                    code: status_code,
                    message: error_response.error.message,
                });
            }

            return Err(LlmError::ApiError {
                code: status_code,
                message: error_text,
            });
        }

        http_response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(format!("Failed to parse API response: {}", e)))
    }
}

#[async_trait]
impl CaptionModel for OpenAiClient {
    async fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String, LlmError> {
        let request = GenerationRequest::from_prompt(prompt, params);
        let response = self.execute_request(&request).await?;

        let content = response.first_content().ok_or(LlmError::EmptyResponse)?;
        Ok(content.trim().to_string())
    }
}

/// Error response from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Error detail from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = OpenAiClient::new(
            "test-api-key".to_string(),
            "https://api.openai.com/v1".to_string(),
        );
        assert_eq!(client.base_url(), "https://api.openai.com/v1");
        assert_eq!(client.api_key_masked(), "test...-key");
    }

    #[test]
    fn test_api_key_masked_short() {
        let client = OpenAiClient::new("abc".to_string(), "http://localhost".to_string());
        assert_eq!(client.api_key_masked(), "***");
    }

    #[tokio::test]
    async fn test_complete_connection_error() {
        let client = OpenAiClient::new(
            "test-key".to_string(),
            "http://localhost:65535".to_string(),
        );

        let result = client
            .complete("test prompt", &GenerationParams::default())
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), LlmError::RequestFailed(_)));
    }

    #[test]
    fn test_error_response_parsing() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).expect("should parse");
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }
}
