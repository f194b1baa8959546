//! Unified client over the cloud and local backends
//!
//! Construction is fail-fast: a mode that needs the cloud resolves its
//! credential up front, a mode that needs the local server probes it once.
//! Per-call faults are absorbed into the failure variant of the result and
//! never surfaced as errors.

use tracing::warn;

use crate::backends::anthropic::{AnthropicBackend, AnthropicConfig};
use crate::backends::ollama::{OllamaBackend, OllamaConfig};
use crate::error::{GenerationError, Result};
use crate::request::GenerationRequest;
use crate::result::GenerationResult;
use crate::routing::{Backend, RoutingMode};

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Cloud configuration; resolved from the environment when `None`
    pub anthropic: Option<AnthropicConfig>,
    /// Local configuration
    pub ollama: OllamaConfig,
    /// Backend used by hybrid mode when a call carries no override.
    /// Defaults to local, biasing toward the free backend.
    pub hybrid_default: Backend,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            anthropic: None,
            ollama: OllamaConfig::from_env(),
            hybrid_default: Backend::Local,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with environment-resolved defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cloud configuration
    #[must_use]
    pub fn with_anthropic(mut self, config: AnthropicConfig) -> Self {
        self.anthropic = Some(config);
        self
    }

    /// Set the local configuration
    #[must_use]
    pub fn with_ollama(mut self, config: OllamaConfig) -> Self {
        self.ollama = config;
        self
    }

    /// Set the hybrid-mode default backend
    #[must_use]
    pub fn with_hybrid_default(mut self, backend: Backend) -> Self {
        self.hybrid_default = backend;
        self
    }
}

/// Unified client for cloud and local language models
pub struct LlmClient {
    mode: RoutingMode,
    hybrid_default: Backend,
    cloud: Option<AnthropicBackend>,
    local: Option<OllamaBackend>,
}

impl LlmClient {
    /// Construct with environment-resolved configuration
    pub async fn new(mode: RoutingMode) -> Result<Self> {
        Self::with_config(mode, ClientConfig::default()).await
    }

    /// Construct with explicit configuration.
    ///
    /// Fails fast when a required backend cannot be initialized: a missing
    /// credential, an unreachable local server, or a local server with no
    /// models installed each abort construction with a distinct error.
    pub async fn with_config(mode: RoutingMode, config: ClientConfig) -> Result<Self> {
        let cloud = if mode.needs_cloud() {
            Some(match config.anthropic {
                Some(anthropic) => AnthropicBackend::new(anthropic)?,
                None => AnthropicBackend::from_env()?,
            })
        } else {
            None
        };

        let local = if mode.needs_local() {
            Some(OllamaBackend::connect(config.ollama).await?)
        } else {
            None
        };

        Ok(Self {
            mode,
            hybrid_default: config.hybrid_default,
            cloud,
            local,
        })
    }

    /// Routing mode fixed at construction
    #[must_use]
    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    /// Generate using the mode's default backend
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.dispatch(request, None).await
    }

    /// Generate with a per-call backend override.
    ///
    /// The override is honored only in hybrid mode; the fixed modes route
    /// as constructed.
    pub async fn generate_with(
        &self,
        request: &GenerationRequest,
        backend: Backend,
    ) -> GenerationResult {
        self.dispatch(request, Some(backend)).await
    }

    async fn dispatch(
        &self,
        request: &GenerationRequest,
        requested: Option<Backend>,
    ) -> GenerationResult {
        match self.mode.resolve(requested, self.hybrid_default) {
            Backend::Cloud => {
                let Some(backend) = &self.cloud else {
                    return Self::not_initialized(request, Backend::Cloud);
                };
                let model = backend.resolve_model(request).to_string();
                match backend.generate(request, &model).await {
                    Ok(completion) => GenerationResult::Completed(completion),
                    Err(error) => GenerationResult::failed(model, error),
                }
            }
            Backend::Local => {
                let Some(backend) = &self.local else {
                    return Self::not_initialized(request, Backend::Local);
                };
                let model = backend.resolve_model(request).to_string();
                match backend.generate(request, &model).await {
                    Ok(completion) => GenerationResult::Completed(completion),
                    Err(error) => GenerationResult::failed(model, error),
                }
            }
        }
    }

    // Construction guarantees a backend for every resolvable route; this
    // path exists so routing can never panic.
    fn not_initialized(request: &GenerationRequest, backend: Backend) -> GenerationResult {
        GenerationResult::failed(
            request.model.clone().unwrap_or_default(),
            GenerationError::Api(format!("{} backend not initialized", backend.as_str())),
        )
    }

    /// List models across enabled backends.
    ///
    /// The cloud contributes its fixed known-model list; the local list is
    /// queried live. Local query failures are swallowed and contribute
    /// nothing, keeping this a best-effort read-only listing.
    pub async fn get_available_models(&self) -> Vec<String> {
        let mut models = Vec::new();

        if let Some(cloud) = &self.cloud {
            models.extend(cloud.known_models());
        }

        if let Some(local) = &self.local {
            match local.list_models().await {
                Ok(names) => models.extend(names),
                Err(error) => warn!("Ollama model listing failed: {}", error),
            }
        }

        models
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostTracker;
    use crate::error::ConfigError;
    use std::time::Duration;

    fn unreachable_local_config() -> OllamaConfig {
        OllamaConfig::new()
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2))
            .with_probe_timeout(Duration::from_secs(2))
    }

    fn local_only_client(default_model: &str) -> LlmClient {
        LlmClient {
            mode: RoutingMode::LocalOnly,
            hybrid_default: Backend::Local,
            cloud: None,
            local: Some(
                OllamaBackend::with_default_model(unreachable_local_config(), default_model)
                    .unwrap(),
            ),
        }
    }

    #[tokio::test]
    async fn test_local_only_construction_fails_when_unreachable() {
        let config = ClientConfig::new().with_ollama(unreachable_local_config());

        let result = LlmClient::with_config(RoutingMode::LocalOnly, config).await;

        assert!(matches!(
            result.err(),
            Some(ConfigError::BackendUnreachable(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_generation_carries_attempted_model() {
        let client = local_only_client("llama3.2:3b");

        let request = GenerationRequest::new("Hello");
        let result = client.generate(&request).await;

        assert!(result.is_failed());
        assert_eq!(result.model(), "llama3.2:3b");
        match &result {
            GenerationResult::Failed(failure) => {
                assert!(!failure.error.to_string().is_empty());
            }
            GenerationResult::Completed(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_failed_generation_is_not_accounted() {
        let client = local_only_client("llama3.2:3b");
        let tracker = CostTracker::new();

        let request = GenerationRequest::new("Hello");
        let result = client.generate(&request).await;
        assert!(result.is_failed());

        tracker.add_call(&result).await;

        let summary = tracker.get_summary().await;
        assert_eq!(summary.total_calls, 0);
        assert_eq!(summary.total_input_tokens, 0);
        assert_eq!(summary.total_output_tokens, 0);
        assert_eq!(summary.total_cost, 0.0);
    }

    #[tokio::test]
    async fn test_model_override_wins_over_default() {
        let client = local_only_client("llama3.2:3b");

        let request = GenerationRequest::new("Hello").with_model("mistral:7b");
        let result = client.generate(&request).await;

        assert!(result.is_failed());
        assert_eq!(result.model(), "mistral:7b");
    }

    #[tokio::test]
    async fn test_get_available_models_swallows_local_failure() {
        let client = local_only_client("llama3.2:3b");

        // No cloud backend and the local listing fails: empty, not an error
        let models = client.get_available_models().await;
        assert!(models.is_empty());
    }
}
