//! Configuration for loading manifests into a lint context.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options controlling how the loader turns documents into context entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderConfig {
    /// If true, a document without `metadata.name` is recorded as invalid.
    #[serde(default)]
    pub require_name: bool,

    /// If true, blank and comment-only documents are skipped silently.
    /// Otherwise each one is recorded as an invalid object.
    #[serde(default = "default_true")]
    pub skip_empty_documents: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            require_name: false,
            skip_empty_documents: true,
        }
    }
}

impl LoaderConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat unnamed objects as load failures.
    pub fn with_require_name(mut self) -> Self {
        self.require_name = true;
        self
    }

    /// Record blank documents as load failures instead of skipping them.
    pub fn keep_empty_documents(mut self) -> Self {
        self.skip_empty_documents = false;
        self
    }

    /// Load configuration from a YAML string.
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to parse loader config: {0}")]
    ParseError(String),
}
