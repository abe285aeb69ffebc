use axum::{extract::State, response::Json};
use std::collections::BTreeMap;
use tracing::{error, info, warn};

use crate::error::{ApiError, ErrorEnvelope};
use crate::extract::ValidatedJson;
use crate::models::{HealthStatus, ServiceInfo, SummarizationRequest, SummarizationResponse};
use crate::provider::{ChatMessage, CompletionRequest, ProviderError};
use crate::AppState;

pub const SERVICE_NAME: &str = "AI Text Summarization API";
pub const SERVICE_DESCRIPTION: &str =
    "A microservice that provides text summarization using OpenAI's GPT model";
pub const MAINTAINER: &str = "manola1109";

pub const SYSTEM_PROMPT: &str = "You are a text-summarization expert. Provide concise summaries.";
pub const USER_PROMPT_PREFIX: &str = "Summarize the following text:\n\n";

/// Basic API information and the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses((status = 200, description = "Service information", body = ServiceInfo))
)]
pub async fn root() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("root".to_string(), "/".to_string()),
        ("health".to_string(), "/health".to_string()),
        ("docs".to_string(), "/docs".to_string()),
        ("openapi".to_string(), "/openapi.json".to_string()),
        ("summarize".to_string(), "/summarize".to_string()),
    ]);

    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        current_time: shared::utc_timestamp(),
        endpoints,
        maintainer: MAINTAINER.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is running", body = HealthStatus))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: shared::utc_timestamp(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
    })
}

/// Fixed system + user prompt sent for every summarization.
pub fn build_prompt(text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("{}{}", USER_PROMPT_PREFIX, text)),
    ]
}

/// Summarize the provided text with the configured chat-completion model.
#[utoipa::path(
    post,
    path = "/summarize",
    tag = "Summarization",
    request_body = SummarizationRequest,
    responses(
        (status = 200, description = "Summary generated", body = SummarizationResponse),
        (status = 400, description = "Empty text or malformed JSON", body = ErrorEnvelope),
        (status = 422, description = "Request failed schema validation", body = ErrorEnvelope),
        (status = 500, description = "Summarization provider failed", body = ErrorEnvelope)
    )
)]
pub async fn summarize(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SummarizationRequest>,
) -> Result<Json<SummarizationResponse>, ApiError> {
    if request.text.trim().is_empty() {
        warn!("Rejected summarization request with empty text");
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let completion_request = CompletionRequest {
        messages: build_prompt(&request.text),
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    };

    let completions = state
        .provider
        .complete(completion_request)
        .await
        .map_err(|e| {
            error!("Summarization provider call failed: {}", e);
            ApiError::from(e)
        })?;

    let Some(first) = completions.into_iter().next() else {
        error!("Summarization provider returned no completions");
        return Err(ProviderError::NoCompletions.into());
    };
    let Some(content) = first.content else {
        error!("Summarization provider returned a completion without content");
        return Err(ProviderError::MissingContent.into());
    };

    let response = SummarizationResponse::new(&request.text, &content);
    info!(
        "Summarized {} chars into {} chars",
        response.original_length, response.summary_length
    );

    Ok(Json(response))
}
