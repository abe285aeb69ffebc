use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "text": "Your text to summarize goes here",
    "max_tokens": 150,
    "temperature": 0.7
}))]
pub struct SummarizationRequest {
    /// The text to be summarized. Emptiness is checked by the handler.
    pub text: String,
    /// Maximum tokens in the summary, 1..=2000.
    #[serde(default = "default_max_tokens")]
    #[schema(minimum = 1, maximum = 2000, default = 150)]
    #[validate(range(min = 1, max = 2000, message = "max_tokens must be between 1 and 2000"))]
    pub max_tokens: u32,
    /// Sampling temperature, 0.0..=1.0.
    #[serde(default = "default_temperature")]
    #[schema(minimum = 0.0, maximum = 1.0, default = 0.7)]
    #[validate(range(min = 0.0, max = 1.0, message = "temperature must be between 0 and 1"))]
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "summary": "Summarized text example",
    "original_length": 100,
    "summary_length": 50,
    "created_at": "2025-04-24T08:15:25.000000Z"
}))]
pub struct SummarizationResponse {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub created_at: String,
}

impl SummarizationResponse {
    /// Builds the response from the original input and the raw completion
    /// text. Lengths are always derived from the strings themselves.
    pub fn new(original_text: &str, completion: &str) -> Self {
        let summary = completion.trim().to_string();
        Self {
            original_length: shared::char_count(original_text),
            summary_length: shared::char_count(&summary),
            summary,
            created_at: shared::utc_timestamp(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub description: String,
    pub version: String,
    pub status: String,
    pub current_time: String,
    pub endpoints: BTreeMap<String, String>,
    pub maintainer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
}
