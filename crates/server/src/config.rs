//! Server configuration

use std::time::Duration;

use triage_core::DEFAULT_DELIMITER;

/// Server configuration loaded from environment variables.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// Gemini API key; `None` disables the chat endpoint with a 503
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub llm_timeout: Duration,
    pub cors_origins: Vec<String>,
    pub paragraph_delimiter: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| crate::ai::client::DEFAULT_MODEL.into()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| crate::ai::client::DEFAULT_BASE_URL.into()),
            llm_timeout: Duration::from_secs(
                std::env::var("LLM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| parse_list(&s))
                .unwrap_or_else(|_| vec!["*".to_string()]),
            paragraph_delimiter: std::env::var("TRIAGE_PARAGRAPH_DELIMITER")
                .map(|s| unescape(&s))
                .unwrap_or_else(|_| DEFAULT_DELIMITER.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            gemini_api_key: None,
            gemini_model: crate::ai::client::DEFAULT_MODEL.to_string(),
            gemini_base_url: crate::ai::client::DEFAULT_BASE_URL.to_string(),
            llm_timeout: Duration::from_secs(60),
            cors_origins: vec!["*".to_string()],
            paragraph_delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Decode `\n`, `\r` and `\t` escapes so a delimiter can be set from a
/// single-line env value
fn unescape(value: &str) -> String {
    value
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
}
