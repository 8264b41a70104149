//! Environment variable loading

use std::path::PathBuf;
use std::str::FromStr;

use super::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_MAX_TOKENS, DEFAULT_CHAT_MODEL, DEFAULT_STT_MODEL,
    DEFAULT_TTS_MODEL, ServerConfig, TlsConfig,
};

/// Primary credential variable.
pub(crate) const PRIMARY_KEY_VAR: &str = "EMERGENT_LLM_KEY";
/// Vendor-specific fallback credential variable.
pub(crate) const FALLBACK_KEY_VAR: &str = "OPENAI_API_KEY";

/// Read an environment variable, treating empty or whitespace-only values as unset.
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("Invalid value for {name} ('{raw}'): {e}")),
        None => Ok(None),
    }
}

/// Build a configuration from the process environment with defaults for unset values.
pub(crate) fn load_from_env() -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let tls = match (env_var("TLS_CERT_PATH"), env_var("TLS_KEY_PATH")) {
        (Some(cert), Some(key)) => Some(TlsConfig {
            cert_path: PathBuf::from(cert),
            key_path: PathBuf::from(key),
        }),
        (None, None) => None,
        _ => return Err("TLS_CERT_PATH and TLS_KEY_PATH must be set together".into()),
    };

    let api_key = env_var(PRIMARY_KEY_VAR).or_else(|| env_var(FALLBACK_KEY_VAR));

    Ok(ServerConfig {
        host: env_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
        port: parse_env("PORT")?.unwrap_or(8001),
        tls,
        api_key,
        base_url: env_var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        stt_model: env_var("STT_MODEL").unwrap_or_else(|| DEFAULT_STT_MODEL.to_string()),
        chat_model: env_var("CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
        chat_max_tokens: parse_env("CHAT_MAX_TOKENS")?.unwrap_or(DEFAULT_CHAT_MAX_TOKENS),
        tts_model: env_var("TTS_MODEL").unwrap_or_else(|| DEFAULT_TTS_MODEL.to_string()),
        request_timeout_seconds: parse_env("REQUEST_TIMEOUT_SECONDS")?,
        cors_allowed_origins: env_var("CORS_ALLOWED_ORIGINS"),
        rate_limit_requests_per_second: parse_env("RATE_LIMIT_REQUESTS_PER_SECOND")?
            .unwrap_or(60),
        rate_limit_burst_size: parse_env("RATE_LIMIT_BURST_SIZE")?.unwrap_or(10),
    })
}
