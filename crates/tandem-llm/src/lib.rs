//! Tandem LLM - unified client over cloud and local language models
//!
//! This crate provides one call surface over two model-serving backends:
//! - Anthropic: Claude messages API (cloud, billed per token)
//! - Ollama: local HTTP generation API (free)
//!
//! A [`LlmClient`] is constructed with a fixed [`RoutingMode`] and returns a
//! normalized [`GenerationResult`] regardless of which backend served the
//! request. Results can be fed to a [`CostTracker`] which accumulates token
//! usage and computes running cost under a pricing table.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backends;
pub mod client;
pub mod cost;
pub mod error;
pub mod request;
pub mod result;
pub mod routing;
pub mod util;

pub use client::{ClientConfig, LlmClient};
pub use cost::{CallRecord, CostTracker, ModelPricing, PricingTable, UsageSummary};
pub use error::{ConfigError, GenerationError, Result};
pub use request::GenerationRequest;
pub use result::{Completion, GenerationFailure, GenerationResult, TokenUsage};
pub use routing::{Backend, RoutingMode};

// Re-export backend types
pub use backends::anthropic::{AnthropicBackend, AnthropicConfig};
pub use backends::ollama::{OllamaBackend, OllamaConfig};
