//! Backend routing
//!
//! The backend choice is a tagged two-case variant resolved once per call.
//! The routing mode is fixed at client construction; only hybrid mode
//! honors a per-call override.

use serde::{Deserialize, Serialize};

/// One of the two model-serving surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Anthropic messages API
    Cloud,
    /// Ollama HTTP API
    Local,
}

impl Backend {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Local => "local",
        }
    }
}

/// Routing policy fixed at client construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingMode {
    /// Every call goes to the cloud backend
    CloudOnly,
    /// Every call goes to the local backend
    LocalOnly,
    /// Per-call override allowed; otherwise a configured default backend
    Hybrid,
}

impl RoutingMode {
    /// Resolve the effective backend for one call.
    ///
    /// The requested override is honored only in hybrid mode; the fixed
    /// modes always win.
    #[must_use]
    pub fn resolve(self, requested: Option<Backend>, hybrid_default: Backend) -> Backend {
        match self {
            Self::CloudOnly => Backend::Cloud,
            Self::LocalOnly => Backend::Local,
            Self::Hybrid => requested.unwrap_or(hybrid_default),
        }
    }

    pub(crate) fn needs_cloud(self) -> bool {
        matches!(self, Self::CloudOnly | Self::Hybrid)
    }

    pub(crate) fn needs_local(self) -> bool {
        matches!(self, Self::LocalOnly | Self::Hybrid)
    }
}
