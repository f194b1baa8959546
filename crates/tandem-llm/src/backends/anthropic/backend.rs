use reqwest::Client;
use tracing::{debug, instrument};

use super::security::sanitize_api_error;
use super::types::{
    AnthropicConfig, ApiErrorBody, MessagesRequest, MessagesResponse, ResponseContentBlock,
    WireMessage, API_VERSION, KNOWN_MODELS,
};
use crate::error::{ConfigError, GenerationError, Result};
use crate::request::GenerationRequest;
use crate::result::{Completion, TokenUsage};

/// Anthropic Claude backend
pub struct AnthropicBackend {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicBackend {
    /// Create a new backend
    pub fn new(config: AnthropicConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let config = AnthropicConfig::from_env()?;
        Self::new(config)
    }

    /// Fixed list of known cloud models
    #[must_use]
    pub fn known_models(&self) -> Vec<String> {
        KNOWN_MODELS.iter().map(|s| (*s).to_string()).collect()
    }

    /// Default model for this backend
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }

    pub(crate) fn resolve_model<'a>(&'a self, request: &'a GenerationRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }

    /// Generate a completion for a single-turn request.
    ///
    /// The system instruction rides in the API's dedicated `system` field,
    /// never concatenated into the prompt.
    #[instrument(skip(self, request), fields(model = %model))]
    pub(crate) async fn generate(
        &self,
        request: &GenerationRequest,
        model: &str,
    ) -> std::result::Result<Completion, GenerationError> {
        let wire_request = MessagesRequest {
            model: model.to_string(),
            max_tokens: request.max_tokens,
            system: request.system.clone(),
            messages: vec![WireMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            temperature: request.temperature,
        };

        let response = self.send_request(wire_request).await?;

        // Extract text content
        let content = response
            .content
            .iter()
            .filter_map(|block| match block {
                ResponseContentBlock::Text { text } => Some(text.as_str()),
                ResponseContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(Completion {
            content,
            model: response.model,
            usage: TokenUsage {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
            },
            // Passed through verbatim; empty when the API omits it
            stop_reason: response.stop_reason.unwrap_or_default(),
        })
    }

    /// Send request to the messages endpoint
    async fn send_request(
        &self,
        request: MessagesRequest,
    ) -> std::result::Result<MessagesResponse, GenerationError> {
        let url = format!("{}/v1/messages", self.config.base_url);

        debug!("Sending request to Anthropic: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(self.config.timeout.as_millis() as u64)
                } else {
                    GenerationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !status.is_success() {
            // Try to parse the structured error response first
            if let Ok(error) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(GenerationError::Api(sanitize_api_error(&format!(
                    "{}: {}",
                    error.error.r#type, error.error.message
                ))));
            }
            // SECURITY: Don't expose raw HTTP response body
            return Err(GenerationError::Api(sanitize_api_error(&format!(
                "HTTP {}: {}",
                status, body
            ))));
        }

        serde_json::from_str(&body).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }
}
