mod api;

use std::env;
use std::sync::Arc;

use axum::Router;
use mealsmith_core::ai::{AiClient, AiConfig, Capability, OpenAiClient};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers.
pub struct AppState {
    /// Model configuration; also backs the status endpoint.
    pub config: AiConfig,
    /// Model client, present only when the capability check passes.
    pub client: Option<Arc<dyn AiClient>>,
}

pub type SharedState = Arc<AppState>;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the model client from configuration, logging why generation
/// will run offline when the capability check fails.
fn build_client(config: &AiConfig) -> Option<Arc<dyn AiClient>> {
    match config.capability() {
        Capability::Available => match OpenAiClient::from_config(config) {
            Ok(client) => {
                tracing::info!(model = %config.model, "model client configured");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "model client unavailable, recipes will be synthesized offline");
                None
            }
        },
        Capability::NotConfigured => {
            tracing::info!("no API key configured, recipes will be synthesized offline");
            None
        }
        Capability::InvalidKeyFormat => {
            tracing::warn!("API key has invalid format, recipes will be synthesized offline");
            None
        }
    }
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_tracing();

    let config = AiConfig::from_env();
    let client = build_client(&config);
    let state: SharedState = Arc::new(AppState { config, client });

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .merge(api::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(api::handle_panic));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");
    tracing::info!("OpenAPI spec available at http://localhost:3000/api-docs/openapi.json");

    axum::serve(listener, app).await.unwrap();
}
