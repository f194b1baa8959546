//! Backend implementations
//!
//! One submodule per model-serving surface. Each backend normalizes its
//! API's response shape into [`crate::result::Completion`].

/// Anthropic cloud backend
pub mod anthropic;
/// Ollama local backend
pub mod ollama;
