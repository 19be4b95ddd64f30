// src/config.rs
use std::{fmt, time::Duration};

use crate::error::RelayError;

pub const MODEL_ID: &str = "llama3-8b-8192";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Process-wide settings, loaded once at startup and never mutated.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model_id: &'static str,
    pub base_url: String,
    pub host: String,
    pub port: String,
    pub request_timeout: Duration,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    /// Load from the process environment.
    ///
    /// - GROQ_API_KEY: required
    /// - GROQ_BASE_URL: upstream root (default: Groq's OpenAI-compatible API)
    /// - HOST / PORT: listener (default: 0.0.0.0:5001)
    /// - GROQ_TIMEOUT_SECS: upstream request timeout (default: 60)
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(RelayError::CredentialMissing)?;

        let base_url = lookup("GROQ_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = match lookup("GROQ_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| RelayError::init(format!("invalid GROQ_TIMEOUT_SECS: {raw:?}")))?;
                if secs == 0 {
                    return Err(RelayError::init("GROQ_TIMEOUT_SECS must be greater than zero"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            model_id: MODEL_ID,
            base_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
            request_timeout,
        })
    }

    /// The listener address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
