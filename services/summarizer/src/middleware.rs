use axum::http::HeaderValue;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{AllowedOrigins, CorsConfig};

/// Builds the CORS policy. Wildcards cannot be sent alongside
/// `Access-Control-Allow-Credentials: true`, so a permissive policy with
/// credentials mirrors the request instead.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = if config.allow_credentials {
        CorsLayer::new()
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        CorsLayer::new().allow_methods(Any).allow_headers(Any)
    };

    match &config.allowed_origins {
        AllowedOrigins::Any if config.allow_credentials => {
            layer.allow_origin(AllowOrigin::mirror_request())
        }
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin '{}'", origin);
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}

pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
