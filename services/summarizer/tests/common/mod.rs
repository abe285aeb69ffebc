#![allow(dead_code)]

pub mod mock_openai;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use summarizer::{
    create_app, AppState, Completion, CompletionProvider, CompletionRequest, Config, ProviderError,
};

pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// What the mock provider should answer with on every call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Completions(Vec<Option<String>>),
    ApiError { status: u16, message: String },
}

#[derive(Clone)]
pub struct MockProvider {
    reply: Arc<Mutex<MockReply>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    pub fn replying(content: &str) -> Self {
        Self::with_reply(MockReply::Completions(vec![Some(content.to_string())]))
    }

    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<Completion>, ProviderError> {
        self.requests.lock().unwrap().push(request);
        match self.reply.lock().unwrap().clone() {
            MockReply::Completions(contents) => Ok(contents
                .into_iter()
                .map(|content| Completion { content })
                .collect()),
            MockReply::ApiError { status, message } => Err(ProviderError::Api { status, message }),
        }
    }
}

pub fn test_config() -> Config {
    test_config_with(&[])
}

/// Test configuration with extra environment variables layered on top.
pub fn test_config_with(vars: &[(&str, &str)]) -> Config {
    Config::from_lookup(|name| {
        if let Some((_, value)) = vars.iter().find(|(key, _)| *key == name) {
            return Some(value.to_string());
        }
        match name {
            "OPENAI_API_KEY" => Some("sk-test".to_string()),
            "ENVIRONMENT" => Some("test".to_string()),
            _ => None,
        }
    })
    .unwrap()
}

pub fn setup_test_app(provider: MockProvider) -> (AppState, axum::Router) {
    setup_test_app_with_config(provider, test_config())
}

pub fn setup_test_app_with_config(
    provider: MockProvider,
    config: Config,
) -> (AppState, axum::Router) {
    let state = AppState::new(config, Arc::new(provider));
    let app = create_app(state.clone());
    (state, app)
}
