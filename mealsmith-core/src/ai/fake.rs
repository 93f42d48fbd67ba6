//! Fake model client for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs. Can also be forced to fail to
//! exercise the fallback path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::client::AiClient;
use crate::error::AiError;

/// A fake model client for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring (case-insensitive). If no match is found, returns the default
/// response or an error.
#[derive(Debug)]
pub struct FakeClient {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// If set, every call fails with this message
    fail_with: Option<String>,
    /// Number of completed calls, for asserting call counts in tests
    calls: AtomicUsize,
}

impl Default for FakeClient {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a FakeClient that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Create a FakeClient that fails every call with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .expect("responses lock poisoned")
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of times `complete` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.fail_with {
            return Err(AiError::RequestFailed(message.clone()));
        }

        let responses = self.responses.read().expect("responses lock poisoned");

        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(AiError::RequestFailed(format!(
                "FakeClient: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_client_matching() {
        let client = FakeClient::with_response("chicken", "a chicken recipe");
        let result = client.complete("Recipes with Chicken please").await.unwrap();
        assert_eq!(result, "a chicken recipe");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fake_client_no_match() {
        let client = FakeClient::new();
        let result = client.complete("random prompt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_client_default_response() {
        let client = FakeClient::new().with_default_response("default");
        let result = client.complete("random prompt").await.unwrap();
        assert_eq!(result, "default");
    }

    #[tokio::test]
    async fn test_fake_client_failing() {
        let client = FakeClient::failing("boom");
        let result = client.complete("anything").await;
        assert!(matches!(result, Err(AiError::RequestFailed(m)) if m == "boom"));
        assert_eq!(client.call_count(), 1);
    }
}
