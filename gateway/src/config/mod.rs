//! Configuration module for the SmartSpeak gateway
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use smartspeak_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

mod env;
mod merge;
mod validation;
mod yaml;

pub use yaml::YamlConfig;

/// Default vendor API root. Overridable so tests can point at a local mock server.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_STT_MODEL: &str = "whisper-1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TTS_MODEL: &str = "tts-1";
/// Upper bound on generated reply length, in tokens.
pub const DEFAULT_CHAT_MAX_TOKENS: u32 = 300;

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains all configuration needed to run the gateway:
/// - Server settings (host, port, TLS)
/// - Vendor credential and model selection
/// - Security settings (CORS, rate limiting)
///
/// The vendor credential is optional. Its absence switches every service to
/// mock mode at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Vendor settings
    /// Shared credential for transcription, chat and speech synthesis
    pub api_key: Option<String>,
    /// API root, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub stt_model: String,
    pub chat_model: String,
    pub chat_max_tokens: u32,
    pub tts_model: String,
    /// Per-request timeout for vendor calls. None keeps the HTTP client default.
    pub request_timeout_seconds: Option<u64>,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,

    // Rate limiting configuration
    /// Maximum requests per second per IP address
    /// Default: 60
    pub rate_limit_requests_per_second: u32,
    /// Maximum burst size for rate limiting
    /// Default: 10
    pub rate_limit_burst_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            tls: None,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            stt_model: DEFAULT_STT_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            chat_max_tokens: DEFAULT_CHAT_MAX_TOKENS,
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            request_timeout_seconds: None,
            cors_allowed_origins: None,
            rate_limit_requests_per_second: 60,
            rate_limit_burst_size: 10,
        }
    }
}

/// Zeroize the credential when ServerConfig is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.api_key {
            key.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables only
    ///
    /// Reads the process environment (including values loaded from `.env` in `main`),
    /// applies defaults for anything unset, then validates the result.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = merge::merge_config(None)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when no vendor credential is configured and services answer with canned data.
    pub fn is_mock_mode(&self) -> bool {
        self.api_key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    const ENV_VARS: &[&str] = &[
        "HOST",
        "PORT",
        "TLS_CERT_PATH",
        "TLS_KEY_PATH",
        "EMERGENT_LLM_KEY",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "STT_MODEL",
        "CHAT_MODEL",
        "CHAT_MAX_TOKENS",
        "TTS_MODEL",
        "REQUEST_TIMEOUT_SECONDS",
        "CORS_ALLOWED_ORIGINS",
        "RATE_LIMIT_REQUESTS_PER_SECOND",
        "RATE_LIMIT_BURST_SIZE",
    ];

    fn cleanup_env_vars() {
        unsafe {
            for name in ENV_VARS {
                env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_address_and_mock_mode() {
        let mut config = ServerConfig::default();
        assert_eq!(config.address(), "0.0.0.0:8001");
        assert!(config.is_mock_mode());
        assert!(config.tls.is_none());

        config.api_key = Some("sk-test".to_string());
        assert!(!config.is_mock_mode());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        cleanup_env_vars();

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8001);
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.stt_model, "whisper-1");
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.chat_max_tokens, 300);
        assert_eq!(config.tts_model, "tts-1");
        assert_eq!(config.request_timeout_seconds, None);
        assert_eq!(config.rate_limit_requests_per_second, 60);
        assert_eq!(config.rate_limit_burst_size, 10);
        assert!(config.is_mock_mode());

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_primary_credential_wins() {
        cleanup_env_vars();

        unsafe {
            env::set_var("EMERGENT_LLM_KEY", "primary-key");
            env::set_var("OPENAI_API_KEY", "fallback-key");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.api_key, Some("primary-key".to_string()));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_fallback_credential() {
        cleanup_env_vars();

        unsafe {
            env::set_var("EMERGENT_LLM_KEY", "   ");
            env::set_var("OPENAI_API_KEY", "fallback-key");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.api_key, Some("fallback-key".to_string()));
        assert!(!config.is_mock_mode());

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        cleanup_env_vars();

        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        let result = ServerConfig::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_base_url() {
        cleanup_env_vars();

        unsafe {
            env::set_var("OPENAI_BASE_URL", "ftp://example.com");
        }

        assert!(ServerConfig::from_env().is_err());

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_yaml_overrides_env() {
        cleanup_env_vars();

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml_content = r#"
server:
  host: "127.0.0.1"
  port: 8080

providers:
  api_key: "yaml-key"
  chat_model: "gpt-4o"
  chat_max_tokens: 512

security:
  cors_allowed_origins: "*"
"#;

        fs::write(&config_path, yaml_content).unwrap();

        unsafe {
            env::set_var("HOST", "0.0.0.0");
            env::set_var("OPENAI_API_KEY", "env-key");
            env::set_var("TTS_MODEL", "tts-1-hd");
        }

        let config = ServerConfig::from_file(&config_path).unwrap();

        // YAML overrides ENV
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_key, Some("yaml-key".to_string()));
        assert_eq!(config.chat_model, "gpt-4o");
        assert_eq!(config.chat_max_tokens, 512);
        assert_eq!(config.cors_allowed_origins, Some("*".to_string()));
        // ENV value survives where YAML is silent
        assert_eq!(config.tts_model, "tts-1-hd");

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_missing_file() {
        cleanup_env_vars();

        let config_path = PathBuf::from("/nonexistent/config.yaml");
        let result = ServerConfig::from_file(&config_path);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_tls_requires_both_paths() {
        cleanup_env_vars();

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            r#"
server:
  tls:
    cert_path: "/etc/ssl/cert.pem"
"#,
        )
        .unwrap();

        let result = ServerConfig::from_file(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("TLS"));

        cleanup_env_vars();
    }
}
