use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Stop reason reported for local completions; the generate endpoint does
/// not report one itself.
pub(crate) const LOCAL_STOP_REASON: &str = "complete";

/// Ollama backend configuration
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL (default: <http://localhost:11434>)
    pub base_url: String,
    /// Generation request timeout (local inference is slow)
    pub timeout: Duration,
    /// Timeout for the model-listing probe
    pub probe_timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            probe_timeout: Duration::from_secs(5),
        }
    }
}

impl OllamaConfig {
    /// Create a new configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("OLLAMA_BASE_URL")
            .or_else(|_| std::env::var("OLLAMA_HOST"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the generation timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the probe timeout
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}

// ============================================================================
// API Types
// ============================================================================

/// Request for the generate endpoint
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    /// The model name to use
    pub model: String,
    /// Prompt text (system text already folded in)
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Whether to stream the response
    pub stream: bool,
    /// Additional model options
    pub options: GenerateOptions,
}

/// Model options for the generate endpoint
#[derive(Debug, Serialize)]
pub(crate) struct GenerateOptions {
    /// Maximum number of tokens to generate
    pub num_predict: u32,
}

/// Response from the generate endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    /// Generated text
    pub response: String,
    /// Number of tokens in the prompt
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
    /// Number of tokens generated
    #[serde(default)]
    pub eval_count: Option<u32>,
}

/// Error response from the Ollama API
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    /// Error message
    pub error: String,
}

/// Response from the tags endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    /// List of installed models
    pub models: Vec<ModelEntry>,
}

/// Model entry from the tags response
#[derive(Debug, Deserialize)]
pub(crate) struct ModelEntry {
    /// Name of the model
    pub name: String,
}
