//! Model client over the OpenAI chat completion API.

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

use super::config::{AiConfig, Capability};
use crate::error::AiError;

/// Sampling temperature for recipe generation.
const TEMPERATURE: f32 = 0.7;

/// Output token ceiling for a recipe batch.
const MAX_TOKENS: u32 = 4000;

/// Trait for model clients.
///
/// Implementations should be stateless and thread-safe. The client is
/// responsible for making exactly one API call per invocation and
/// returning the model's raw text response. No retries: a single failure
/// signals the orchestrator immediately.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send a prompt to the model and get its raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}

/// Client for the OpenAI chat completion API.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    /// Build a client from configuration.
    ///
    /// Runs the static capability check first and fails without a network
    /// call when the key is absent or malformed.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        match config.capability() {
            Capability::NotConfigured => {
                return Err(AiError::NotConfigured("OPENAI_API_KEY not set".to_string()))
            }
            Capability::InvalidKeyFormat => return Err(AiError::InvalidKeyFormat),
            Capability::Available => {}
        }

        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AiError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.base_url);

        Ok(Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.to_string())
            .build()
            .map_err(|e| AiError::RequestFailed(e.to_string()))?
            .into();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .temperature(TEMPERATURE)
            .max_completion_tokens(MAX_TOKENS)
            .build()
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        tracing::debug!(model = %self.model, "calling chat completion API");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| match e {
                async_openai::error::OpenAIError::ApiError(api) => AiError::Api(api.message),
                other => AiError::RequestFailed(other.to_string()),
            })?;

        response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|text| !text.trim().is_empty())
            .ok_or(AiError::EmptyResponse)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::config::AiConfig;

    #[test]
    fn test_from_config_rejects_missing_key() {
        let config = AiConfig::new(None);
        assert!(matches!(
            OpenAiClient::from_config(&config),
            Err(AiError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_from_config_rejects_bad_prefix() {
        let config = AiConfig::new(Some("not-a-key".to_string()));
        assert!(matches!(
            OpenAiClient::from_config(&config),
            Err(AiError::InvalidKeyFormat)
        ));
    }

    #[test]
    fn test_from_config_accepts_valid_key() {
        let config = AiConfig::new(Some("sk-test".to_string()));
        let client = OpenAiClient::from_config(&config).unwrap();
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.model_name(), "gpt-3.5-turbo");
    }
}
