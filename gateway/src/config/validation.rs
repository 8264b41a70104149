//! Configuration validation logic

use url::Url;

use super::ServerConfig;

/// Validate a fully merged configuration.
pub(crate) fn validate(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    validate_base_url(&config.base_url)?;

    if config.chat_max_tokens == 0 {
        return Err("chat_max_tokens must be greater than zero".into());
    }
    if config.rate_limit_requests_per_second == 0 {
        return Err("rate_limit_requests_per_second must be greater than zero".into());
    }
    if config.rate_limit_burst_size == 0 {
        return Err("rate_limit_burst_size must be greater than zero".into());
    }

    Ok(())
}

/// The vendor base URL must be an absolute http(s) URL.
pub(crate) fn validate_base_url(base_url: &str) -> Result<(), String> {
    let url = Url::parse(base_url).map_err(|e| format!("Invalid base URL '{base_url}': {e}"))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(format!(
                "Base URL must use http or https, got '{other}': {base_url}"
            ));
        }
    }
    if url.host_str().is_none() {
        return Err(format!("Base URL must have a host: {base_url}"));
    }
    Ok(())
}
