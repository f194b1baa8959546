use reqwest::Client;
use tracing::{debug, instrument};

use super::security::sanitize_api_error;
use super::types::{
    ApiErrorBody, GenerateOptions, GenerateRequest, GenerateResponse, OllamaConfig, TagsResponse,
    LOCAL_STOP_REASON,
};
use crate::error::{ConfigError, GenerationError, Result};
use crate::request::GenerationRequest;
use crate::result::{Completion, TokenUsage};

/// Ollama local backend
pub struct OllamaBackend {
    client: Client,
    config: OllamaConfig,
    /// Discovered at the construction probe
    default_model: String,
}

impl OllamaBackend {
    /// Probe the local server and discover a default model.
    ///
    /// Fails fast, distinguishing an unreachable server from one that is
    /// running with no models installed.
    pub async fn connect(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        let models = Self::query_tags(&client, &config)
            .await
            .map_err(|e| ConfigError::BackendUnreachable(format!("{}: {}", config.base_url, e)))?;

        let default_model = models
            .first()
            .cloned()
            .ok_or_else(|| ConfigError::NoModelsInstalled(config.base_url.clone()))?;

        debug!("Ollama reachable, default model: {}", default_model);

        Ok(Self {
            client,
            config,
            default_model,
        })
    }

    /// Create without probing, for tests that exercise the failure paths
    #[cfg(test)]
    pub(crate) fn with_default_model(
        config: OllamaConfig,
        default_model: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            config,
            default_model: default_model.into(),
        })
    }

    /// Default model discovered at construction
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub(crate) fn resolve_model<'a>(&'a self, request: &'a GenerationRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.default_model)
    }

    /// Check if Ollama is reachable
    pub async fn is_available(&self) -> bool {
        Self::query_tags(&self.client, &self.config).await.is_ok()
    }

    /// List installed models
    pub async fn list_models(&self) -> std::result::Result<Vec<String>, GenerationError> {
        Self::query_tags(&self.client, &self.config).await
    }

    async fn query_tags(
        client: &Client,
        config: &OllamaConfig,
    ) -> std::result::Result<Vec<String>, GenerationError> {
        let url = format!("{}/api/tags", config.base_url);

        let response = client
            .get(&url)
            .timeout(config.probe_timeout)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GenerationError::Api(format!(
                "Ollama returned status {}",
                response.status()
            )));
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Generate a completion for a single-turn request
    #[instrument(skip(self, request), fields(model = %model))]
    pub(crate) async fn generate(
        &self,
        request: &GenerationRequest,
        model: &str,
    ) -> std::result::Result<Completion, GenerationError> {
        let wire_request = GenerateRequest {
            model: model.to_string(),
            prompt: flatten_prompt(request),
            temperature: request.temperature,
            stream: false,
            options: GenerateOptions {
                num_predict: request.max_tokens,
            },
        };

        let response = self.send_request(wire_request).await?;

        Ok(Completion {
            content: response.response,
            model: model.to_string(),
            usage: TokenUsage {
                input_tokens: response.prompt_eval_count.unwrap_or(0),
                output_tokens: response.eval_count.unwrap_or(0),
            },
            stop_reason: LOCAL_STOP_REASON.to_string(),
        })
    }

    /// Send request to the generate endpoint
    async fn send_request(
        &self,
        request: GenerateRequest,
    ) -> std::result::Result<GenerateResponse, GenerationError> {
        let url = format!("{}/api/generate", self.config.base_url);

        debug!("Sending request to Ollama: {}", request.model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GenerationError::Network(format!(
                        "Failed to connect to Ollama at {}. Is Ollama running?",
                        self.config.base_url
                    ))
                } else if e.is_timeout() {
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
            if let Ok(error) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(GenerationError::Api(sanitize_api_error(&error.error)));
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

/// Fold the system text into the prompt; the generate endpoint has no
/// distinct system-message concept.
pub(crate) fn flatten_prompt(request: &GenerationRequest) -> String {
    match &request.system {
        Some(system) => format!("{}\n\n{}", system, request.prompt),
        None => request.prompt.clone(),
    }
}
