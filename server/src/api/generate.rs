use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use mealsmith_core::generate::{generate_recipes as run_generation, timestamp_seed};
use mealsmith_core::types::Recipe;
use mealsmith_core::GenerateError;

use crate::api::ErrorResponse;
use crate::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipesRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateRecipesResponse {
    #[schema(value_type = Vec<Object>)]
    pub recipes: Vec<Recipe>,
}

/// Generate recipes from a list of ingredients
///
/// Tries the configured model first; if the provider is unavailable,
/// fails, or returns malformed output, the response is synthesized
/// offline instead. Callers always get a populated recipe list unless
/// the ingredient list itself is empty.
#[utoipa::path(
    post,
    path = "/api/generate-recipes",
    tag = "recipes",
    request_body = GenerateRecipesRequest,
    responses(
        (status = 200, description = "Generated recipes", body = GenerateRecipesResponse),
        (status = 400, description = "Missing or empty ingredients", body = ErrorResponse),
        (status = 500, description = "Unexpected internal failure", body = ErrorResponse)
    )
)]
pub async fn generate_recipes(
    State(state): State<SharedState>,
    Json(request): Json<GenerateRecipesRequest>,
) -> impl IntoResponse {
    let client = state.client.as_deref();

    match run_generation(client, &request.ingredients, timestamp_seed()).await {
        Ok(recipes) => (StatusCode::OK, Json(GenerateRecipesResponse { recipes })).into_response(),
        Err(GenerateError::EmptyIngredients) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Ingredients array is required".to_string(),
            }),
        )
            .into_response(),
    }
}
