pub mod generate;
pub mod status;

use std::any::Any;

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::SharedState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns the API router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/generate-recipes", post(generate::generate_recipes))
        .route("/api/ai-status", get(status::ai_status))
}

/// Generate the complete OpenAPI spec
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(generate::generate_recipes, status::ai_status),
        components(schemas(
            ErrorResponse,
            generate::GenerateRecipesRequest,
            generate::GenerateRecipesResponse,
            status::AiStatusResponse,
        ))
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}

/// Convert a handler panic into the generic 500 error shape.
///
/// Generation is designed never to panic (every model-path failure falls
/// back to synthesis), so this is the last-resort boundary only.
pub fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    tracing::error!("request handler panicked");

    let body = serde_json::json!({ "error": "Failed to generate recipes" }).to_string();

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("static 500 response must build")
}
