//! Error types for tandem-llm

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-time error.
///
/// Fatal: a client that cannot resolve its credential or reach its local
/// backend refuses to initialize.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required credential missing from the environment
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// Local backend did not answer the reachability probe
    #[error("backend unreachable: {0}")]
    BackendUnreachable(String),

    /// Local backend is running but has no models installed
    #[error("no models installed at {0}")]
    NoModelsInstalled(String),

    /// HTTP client could not be built
    #[error("http client error: {0}")]
    HttpClient(String),
}

/// Result type alias for construction-time operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Per-call generation error.
///
/// Never surfaced as a fault: every variant is absorbed into the failure
/// variant of a generation result so a long session survives individual
/// backend hiccups. Callers branch on the variant, not on message strings.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GenerationError {
    /// Network failure
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("timeout after {0}ms")]
    Timeout(u64),

    /// API returned a non-success status
    #[error("api error: {0}")]
    Api(String),

    /// Response body could not be parsed
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
