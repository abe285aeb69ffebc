use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::post,
    Router,
};
use serde_json::{json, Value as JsonValue};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedCompletionCall {
    pub authorization: Option<String>,
    pub body: JsonValue,
}

#[derive(Clone)]
struct MockState {
    calls: Arc<Mutex<Vec<RecordedCompletionCall>>>,
    response_status: Arc<Mutex<StatusCode>>,
    response_body: Arc<Mutex<JsonValue>>,
}

/// A minimal OpenAI-compatible server that records `/v1/chat/completions` calls.
pub struct MockOpenAi {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCompletionCall>>>,
    response_status: Arc<Mutex<StatusCode>>,
    response_body: Arc<Mutex<JsonValue>>,
    _server_handle: tokio::task::JoinHandle<()>,
}

impl MockOpenAi {
    pub async fn start() -> anyhow::Result<Self> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let response_status = Arc::new(Mutex::new(StatusCode::OK));
        let response_body = Arc::new(Mutex::new(completion_body(&["A summary."])));

        let state = MockState {
            calls: calls.clone(),
            response_status: response_status.clone(),
            response_body: response_body.clone(),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(handle_completion))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}/v1", port),
            calls,
            response_status,
            response_body,
            _server_handle: server_handle,
        })
    }

    pub fn set_response(&self, status: StatusCode, body: JsonValue) {
        *self.response_status.lock().unwrap() = status;
        *self.response_body.lock().unwrap() = body;
    }

    pub fn calls(&self) -> Vec<RecordedCompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn completion_body(contents: &[&str]) -> JsonValue {
    let contents: Vec<Option<&str>> = contents.iter().copied().map(Some).collect();
    completion_body_with_nulls(&contents)
}

/// Like [`completion_body`], with `None` rendered as `"content": null`.
pub fn completion_body_with_nulls(contents: &[Option<&str>]) -> JsonValue {
    let choices: Vec<JsonValue> = contents
        .iter()
        .enumerate()
        .map(|(index, content)| {
            json!({
                "index": index,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            })
        })
        .collect();

    json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": choices
    })
}

async fn handle_completion(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> (StatusCode, Json<JsonValue>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .calls
        .lock()
        .unwrap()
        .push(RecordedCompletionCall { authorization, body });

    let status = *state.response_status.lock().unwrap();
    let body = state.response_body.lock().unwrap().clone();
    (status, Json(body))
}
