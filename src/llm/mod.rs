//! LLM integration for hallu-forge.
//!
//! Defines the chat-completion wire types, the [`CaptionModel`] seam the
//! orchestrator depends on, and the two implementations: a real
//! OpenAI-compatible client and an offline placeholder.

pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::GenerationParams;
use crate::error::LlmError;

pub use openai::OpenAiClient;

/// Fixed text substituted when no real model client is configured.
pub const PLACEHOLDER_RESPONSE: &str = "[LLM Placeholder Response]";

/// Fixed text substituted when a remote call fails.
pub const ERROR_SENTINEL: &str = "[LLM Error]";

/// A message in a conversation with an LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (e.g., "system", "user", "assistant").
    pub role: String,
    /// Content of the message.
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request for text generation from an LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier to use for generation.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 - 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Create a request carrying one user message and the given parameters.
    pub fn from_prompt(prompt: &str, params: &GenerationParams) -> Self {
        Self {
            model: params.model.clone(),
            messages: vec![Message::user(prompt)],
            temperature: Some(params.temperature),
            max_tokens: Some(params.max_tokens),
        }
    }
}

/// Response from an LLM generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Unique identifier for this response.
    pub id: String,
    /// Model that generated this response.
    pub model: String,
    /// Generated choices/completions.
    pub choices: Vec<Choice>,
    /// Token usage statistics, when the API reports them.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl GenerationResponse {
    /// Get the content of the first choice, if available.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A single generated choice from the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice in the response.
    pub index: u32,
    /// Generated message.
    pub message: Message,
    /// Reason the generation stopped (e.g., "stop", "length").
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics for a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt.
    pub prompt_tokens: u32,
    /// Number of tokens generated.
    pub completion_tokens: u32,
    /// Total tokens used.
    pub total_tokens: u32,
}

/// Capability the orchestrator depends on: one completion per prompt.
///
/// Implementations return the trimmed text of the first response choice.
/// Each call is attempted exactly once; retry policy is a non-goal.
#[async_trait]
pub trait CaptionModel: Send + Sync {
    /// Generate one completion for the given prompt.
    async fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String, LlmError>;
}

/// Offline stand-in used when no API key is configured.
///
/// Always returns [`PLACEHOLDER_RESPONSE`] and logs a warning, so smoke
/// runs produce structurally complete output without network access.
pub struct PlaceholderModel;

#[async_trait]
impl CaptionModel for PlaceholderModel {
    async fn complete(&self, _prompt: &str, _params: &GenerationParams) -> Result<String, LlmError> {
        tracing::warn!("No LLM client configured; returning placeholder response");
        Ok(PLACEHOLDER_RESPONSE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_prompt() {
        let params = GenerationParams::default();
        let request = GenerationRequest::from_prompt("describe this", &params);

        assert_eq!(request.model, params.model);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "describe this");
        assert_eq!(request.temperature, Some(params.temperature));
        assert_eq!(request.max_tokens, Some(params.max_tokens));
    }

    #[test]
    fn test_request_serialization_skips_unset_fields() {
        let request = GenerationRequest {
            model: "test-model".to_string(),
            messages: vec![Message::user("hi")],
            temperature: None,
            max_tokens: Some(100),
        };

        let json = serde_json::to_string(&request).expect("serialization should succeed");
        assert!(json.contains("\"model\":\"test-model\""));
        assert!(json.contains("\"max_tokens\":100"));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_first_content() {
        let response = GenerationResponse {
            id: "resp-1".to_string(),
            model: "m".to_string(),
            choices: vec![Choice {
                index: 0,
                message: Message {
                    role: "assistant".to_string(),
                    content: "hello".to_string(),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        };
        assert_eq!(response.first_content(), Some("hello"));
    }

    #[tokio::test]
    async fn test_placeholder_model_returns_fixed_text() {
        let model = PlaceholderModel;
        let text = model
            .complete("anything", &GenerationParams::default())
            .await
            .expect("placeholder never fails");
        assert_eq!(text, PLACEHOLDER_RESPONSE);
    }
}
