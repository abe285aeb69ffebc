pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod provider;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

pub use config::Config;
pub use error::{ApiError, ErrorEnvelope};
pub use models::{HealthStatus, ServiceInfo, SummarizationRequest, SummarizationResponse};
pub use provider::{Completion, CompletionProvider, CompletionRequest, OpenAiClient, ProviderError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = middleware::cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/summarize", post(handlers::summarize))
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .route("/docs", get(openapi::docs))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(cors),
        )
        .with_state(state)
}
