//! Model client configuration.

use std::env;

/// Default OpenAI base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Required API key prefix, checked without a network call.
pub const API_KEY_PREFIX: &str = "sk-";

/// Result of the static capability check.
///
/// Anything other than `Available` is a routing signal that sends
/// generation to the offline synthesizer; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Key present and matches the expected format.
    Available,
    /// No key configured.
    NotConfigured,
    /// Key present but does not start with the expected prefix.
    InvalidKeyFormat,
}

/// Model client configuration.
///
/// The credential is injected at construction time; nothing in the core
/// reads the process environment after the config is built.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key, if one was supplied.
    pub api_key: Option<String>,
    /// Model name (e.g. "gpt-3.5-turbo").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl AiConfig {
    /// Create a configuration with an explicit key and defaults for the rest.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `OPENAI_API_KEY`: API key (optional; an empty value counts as unset)
    /// - `MEALSMITH_AI_MODEL`: Model name (default: "gpt-3.5-turbo")
    /// - `MEALSMITH_AI_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let model = env::var("MEALSMITH_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("MEALSMITH_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            model,
            base_url,
        }
    }

    /// Static capability check; never touches the network.
    pub fn capability(&self) -> Capability {
        match self.api_key.as_deref() {
            None => Capability::NotConfigured,
            Some(key) if !key.starts_with(API_KEY_PREFIX) => Capability::InvalidKeyFormat,
            Some(_) => Capability::Available,
        }
    }

    /// Whether any key was supplied, regardless of format.
    pub fn key_present(&self) -> bool {
        self.api_key.is_some()
    }
}
