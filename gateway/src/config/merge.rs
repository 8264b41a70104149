//! Merging YAML values over the environment-derived base configuration

use std::path::PathBuf;

use super::env::load_from_env;
use super::yaml::YamlConfig;
use super::{ServerConfig, TlsConfig};

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load the environment configuration and apply any YAML overrides on top of it.
pub(crate) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let mut config = load_from_env()?;

    let Some(yaml) = yaml else {
        return Ok(config);
    };

    if let Some(server) = yaml.server {
        if let Some(host) = non_empty(server.host) {
            config.host = host;
        }
        if let Some(port) = server.port {
            config.port = port;
        }
        if let Some(tls) = server.tls {
            if tls.enabled == Some(false) {
                config.tls = None;
            } else {
                match (non_empty(tls.cert_path), non_empty(tls.key_path)) {
                    (Some(cert), Some(key)) => {
                        config.tls = Some(TlsConfig {
                            cert_path: PathBuf::from(cert),
                            key_path: PathBuf::from(key),
                        });
                    }
                    (None, None) => {}
                    _ => {
                        return Err(
                            "TLS cert_path and key_path must be configured together".into()
                        );
                    }
                }
            }
        }
    }

    if let Some(providers) = yaml.providers {
        if let Some(key) = non_empty(providers.api_key) {
            config.api_key = Some(key);
        }
        if let Some(base_url) = non_empty(providers.base_url) {
            config.base_url = base_url;
        }
        if let Some(model) = non_empty(providers.stt_model) {
            config.stt_model = model;
        }
        if let Some(model) = non_empty(providers.chat_model) {
            config.chat_model = model;
        }
        if let Some(max_tokens) = providers.chat_max_tokens {
            config.chat_max_tokens = max_tokens;
        }
        if let Some(model) = non_empty(providers.tts_model) {
            config.tts_model = model;
        }
        if providers.request_timeout_seconds.is_some() {
            config.request_timeout_seconds = providers.request_timeout_seconds;
        }
    }

    if let Some(security) = yaml.security {
        if let Some(origins) = non_empty(security.cors_allowed_origins) {
            config.cors_allowed_origins = Some(origins);
        }
        if let Some(rps) = security.rate_limit_requests_per_second {
            config.rate_limit_requests_per_second = rps;
        }
        if let Some(burst) = security.rate_limit_burst_size {
            config.rate_limit_burst_size = burst;
        }
    }

    Ok(config)
}
