use std::env;
use std::time::Duration;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("{name} has an invalid value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub provider: ProviderConfig,
    pub cors: CorsConfig,
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allow_credentials: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("SUMMARIZER_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "SUMMARIZER_PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => 8000,
        };

        let timeout = match lookup("OPENAI_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        name: "OPENAI_TIMEOUT_SECS",
                        value: value.clone(),
                        reason: e.to_string(),
                    })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let allow_credentials = match lookup("CORS_ALLOW_CREDENTIALS") {
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                name: "CORS_ALLOW_CREDENTIALS",
                value: value.clone(),
                reason: "expected true or false".to_string(),
            })?,
            None => true,
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|value| parse_origins(&value))
            .unwrap_or(AllowedOrigins::Any);

        Ok(Self {
            host: lookup("SUMMARIZER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            provider: ProviderConfig {
                api_key,
                base_url: lookup("OPENAI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                timeout,
            },
            cors: CorsConfig {
                allowed_origins,
                allow_credentials,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_origins(value: &str) -> AllowedOrigins {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}
