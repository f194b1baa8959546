//! Ollama - local HTTP API backend
//!
//! This module implements the local backend. Ollama serves models on the
//! same machine; generation is free but the server must be reachable and
//! have at least one model installed.

/// Backend implementation
pub mod backend;
/// Security and sanitization utilities
pub mod security;
/// API types and configuration
pub mod types;


pub use backend::OllamaBackend;
pub use types::{OllamaConfig, DEFAULT_BASE_URL};
