use axum::response::{Html, Json};
use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorEnvelope};
use crate::handlers;
use crate::models::{HealthStatus, ServiceInfo, SummarizationRequest, SummarizationResponse};

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Text Summarization API",
        description = "A microservice that provides text summarization using OpenAI's GPT model",
        contact(name = "manola1109", url = "https://github.com/manola1109")
    ),
    paths(handlers::root, handlers::health_check, handlers::summarize),
    components(schemas(
        SummarizationRequest,
        SummarizationResponse,
        ServiceInfo,
        HealthStatus,
        ErrorEnvelope,
        ErrorBody
    )),
    tags(
        (name = "Root"),
        (name = "Health"),
        (name = "Summarization")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI page; assets come from the public CDN and load the schema
/// from [`OPENAPI_PATH`].
pub async fn docs() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>AI Text Summarization API - Swagger UI</title>
<link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{}',
    dom_id: '#swagger-ui',
    deepLinking: true
}})
</script>
</body>
</html>"#,
        OPENAPI_PATH
    ))
}
