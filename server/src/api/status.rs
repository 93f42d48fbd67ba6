use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use mealsmith_core::ai::Capability;

use crate::SharedState;

/// Static model-availability report.
///
/// Mirrors the routing decision the generator makes: key present and
/// well-formed means the model path will be attempted; anything else
/// means responses come from the offline synthesizer.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiStatusResponse {
    pub available: bool,
    pub provider: String,
    pub message: String,
    pub timestamp: String,
    pub key_present: bool,
    pub key_valid: bool,
}

/// Report whether model-backed generation is available
///
/// Performs the same static credential check as generation; no network
/// call is made.
#[utoipa::path(
    get,
    path = "/api/ai-status",
    tag = "status",
    responses(
        (status = 200, description = "Model availability report", body = AiStatusResponse)
    )
)]
pub async fn ai_status(State(state): State<SharedState>) -> impl IntoResponse {
    let capability = state.config.capability();
    let key_valid = capability == Capability::Available;

    let message = match capability {
        Capability::Available => "Real AI recipe generation is active with OpenAI GPT-4",
        Capability::InvalidKeyFormat => "Invalid API key format - should start with 'sk-'",
        Capability::NotConfigured => {
            "Add OPENAI_API_KEY environment variable to enable real AI generation"
        }
    };

    Json(AiStatusResponse {
        available: key_valid,
        provider: if key_valid { "OpenAI GPT-4" } else { "Enhanced Mock" }.to_string(),
        message: message.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        key_present: state.config.key_present(),
        key_valid,
    })
}
