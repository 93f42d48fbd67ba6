use thiserror::Error;

/// Error type for model client operations.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API key does not start with the expected prefix")]
    InvalidKeyFormat,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("No text content in response")]
    EmptyResponse,
}

/// Error type for extracting JSON from raw model output.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Model response is not valid JSON: {0}")]
    MalformedResponse(String),
}

/// Error type for normalizing a parsed model response.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Model response violates the recipe schema: {0}")]
    SchemaViolation(String),
}

/// Error type surfaced by the generation orchestrator.
///
/// Every model-path failure is recovered internally by synthesis, so the
/// only failure a caller ever sees is invalid input.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Ingredients list must contain at least one non-empty entry")]
    EmptyIngredients,
}
