//! Normalized generation results
//!
//! Both backends produce the same result shape. Exactly one variant is
//! populated per call; there are no partial results.

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};

/// Token usage for a single call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub input_tokens: u32,
    /// Tokens generated
    pub output_tokens: u32,
}

/// A successful generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Generated text
    pub content: String,
    /// Model that served the request, as reported by the backend
    pub model: String,
    /// Token usage
    pub usage: TokenUsage,
    /// Why generation stopped
    pub stop_reason: String,
}

/// A failed generation.
///
/// Carries the model identifier that was attempted so cost accounting can
/// skip the call without string matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationFailure {
    /// Model identifier that was attempted
    pub model: String,
    /// What went wrong
    pub error: GenerationError,
}

/// Normalized result of one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GenerationResult {
    /// The backend produced a completion
    Completed(Completion),
    /// The call failed; no tokens are accounted for it
    Failed(GenerationFailure),
}

impl GenerationResult {
    pub(crate) fn failed(model: impl Into<String>, error: GenerationError) -> Self {
        Self::Failed(GenerationFailure {
            model: model.into(),
            error,
        })
    }

    /// Model identifier the call resolved to, whether it succeeded or not
    #[must_use]
    pub fn model(&self) -> &str {
        match self {
            Self::Completed(completion) => &completion.model,
            Self::Failed(failure) => &failure.model,
        }
    }

    /// True when the call failed
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Completion, if the call succeeded
    #[must_use]
    pub fn completion(&self) -> Option<&Completion> {
        match self {
            Self::Completed(completion) => Some(completion),
            Self::Failed(_) => None,
        }
    }
}
