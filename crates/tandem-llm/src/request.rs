//! Generation request type

/// A single generation request. Immutable per call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// User prompt
    pub prompt: String,
    /// Optional system instruction
    pub system: Option<String>,
    /// Model override; the backend's default model is used when `None`
    pub model: Option<String>,
    /// Sampling temperature (valid range is backend-defined)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Create a request with default generation parameters
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            model: None,
            temperature: 1.0,
            max_tokens: 1024,
        }
    }

    /// Set the system instruction
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the max tokens
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = GenerationRequest::new("Hello");

        assert_eq!(request.prompt, "Hello");
        assert_eq!(request.system, None);
        assert_eq!(request.model, None);
        assert_eq!(request.temperature, 1.0);
        assert_eq!(request.max_tokens, 1024);
    }

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::new("Summarize this")
            .with_system("You are terse")
            .with_model("claude-haiku-4-5-20251001")
            .with_temperature(0.2)
            .with_max_tokens(256);

        assert_eq!(request.system.as_deref(), Some("You are terse"));
        assert_eq!(request.model.as_deref(), Some("claude-haiku-4-5-20251001"));
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 256);
    }
}
