//! Process-wide handle to the OpenAI-compatible API.
//!
//! Built once at startup from the configured credential and shared read-only by
//! every live service. Cloning is cheap: the HTTP client (and its connection
//! pool) and the credential live behind an `Arc`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::config::ServerConfig;

struct Inner {
    http: Client,
    api_key: Zeroizing<String>,
    base_url: String,
}

#[derive(Clone)]
pub struct OpenAIClient {
    inner: Arc<Inner>,
}

impl fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("base_url", &self.inner.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl OpenAIClient {
    /// Create a client for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// `timeout` of `None` keeps reqwest's default (no overall timeout).
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().pool_max_idle_per_host(4);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                api_key: Zeroizing::new(api_key.into()),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Build the shared client if a credential is configured; `None` means mock mode.
    pub fn from_config(config: &ServerConfig) -> Result<Option<Self>, reqwest::Error> {
        let Some(api_key) = config.api_key.as_deref() else {
            return Ok(None);
        };
        let timeout = config.request_timeout_seconds.map(Duration::from_secs);
        Self::new(api_key, &config.base_url, timeout).map(Some)
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for an API path such as `/audio/speech`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url,
            path.trim_start_matches('/')
        )
    }

    /// Start an authenticated POST request against an API path.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.inner
            .http
            .post(self.endpoint(path))
            .bearer_auth(self.inner.api_key.as_str())
    }
}

/// OpenAI API error response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIErrorResponse {
    /// Error details.
    pub error: OpenAIError,
}

/// OpenAI API error details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAIError {
    /// Human-readable error message.
    pub message: String,

    /// Error type identifier.
    #[serde(rename = "type", default)]
    pub error_type: String,

    /// Parameter that caused the error (if applicable).
    #[serde(default)]
    pub param: Option<String>,

    /// Error code (if applicable).
    #[serde(default)]
    pub code: Option<String>,
}

impl fmt::Display for OpenAIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.error_type)
    }
}

impl std::error::Error for OpenAIError {}

/// Turn a non-success response into a readable message, preferring the vendor's error envelope.
pub(crate) async fn describe_error_response(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    describe_error_body(status, &body)
}

pub(crate) fn describe_error_body(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<OpenAIErrorResponse>(body) {
        Ok(parsed) => format!("OpenAI API error: {}", parsed.error),
        Err(_) => format!("OpenAI API error ({status}): {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let client = OpenAIClient::new("sk-test", "https://api.openai.com/v1/", None).unwrap();
        assert_eq!(client.base_url(), "https://api.openai.com/v1");
        assert_eq!(
            client.endpoint("/audio/speech"),
            "https://api.openai.com/v1/audio/speech"
        );
        assert_eq!(
            client.endpoint("chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = OpenAIClient::new("sk-very-secret", "https://api.openai.com/v1", None).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_config_without_key_is_none() {
        let config = ServerConfig::default();
        assert!(OpenAIClient::from_config(&config).unwrap().is_none());

        let mut config = ServerConfig::default();
        config.api_key = Some("sk-test".to_string());
        assert!(OpenAIClient::from_config(&config).unwrap().is_some());
    }

    #[test]
    fn test_describe_error_body() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#;
        let msg = describe_error_body(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(
            msg,
            "OpenAI API error: Incorrect API key provided (invalid_request_error)"
        );

        let msg = describe_error_body(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream down"));
    }
}
