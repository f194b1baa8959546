//! Anthropic - Claude messages API backend
//!
//! This module implements the cloud backend using reqwest.

/// Backend implementation
pub mod backend;
/// Security and sanitization utilities
pub mod security;
/// API types and configuration
pub mod types;


pub use backend::AnthropicBackend;
pub use types::{AnthropicConfig, DEFAULT_MODEL, KNOWN_MODELS};
